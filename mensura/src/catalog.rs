//! Embedded unit catalog
//!
//! Factors are written as exact decimal strings and parsed once at
//! registry load. Prefixed forms (km, mA, µmol, kWh, ...) are not
//! registered: the prefix resolver synthesizes them on the fly, so
//! every entry here times the full SI ladder is reachable.
//!
//! The column pseudo-bases H2O, Hg and O2 carry pressure-per-length
//! so that length·column composes to a pressure: inHg, mmH₂O, ft·Hg.

use crate::dimension::{self, Dimension};
use crate::registry::UnitRegistry;
use mensura_core::Number;

fn num(s: &str) -> Number {
    // Catalog literals are static; a typo is unrecoverable at init
    Number::from_str(s).unwrap_or_else(|_| panic!("bad catalog factor: {s}"))
}

pub(crate) fn register_all(reg: &mut UnitRegistry) {
    register_base_units(reg);
    register_named_derived_units(reg);
    register_length_units(reg);
    register_mass_units(reg);
    register_time_units(reg);
    register_temperature_units(reg);
    register_area_units(reg);
    register_volume_units(reg);
    register_velocity_units(reg);
    register_acceleration_units(reg);
    register_force_units(reg);
    register_energy_units(reg);
    register_power_units(reg);
    register_pressure_units(reg);
    register_viscosity_units(reg);
    register_magnetism_units(reg);
    register_radiation_units(reg);
    register_electrical_units(reg);
    register_data_units(reg);
    register_angle_units(reg);
    register_photometry_units(reg);
    register_dimensionless_units(reg);
}

fn register_base_units(reg: &mut UnitRegistry) {
    reg.register_base("m", "meter", dimension::LENGTH);
    reg.register_base("kg", "kilogram", dimension::MASS);
    reg.register_base("s", "second", dimension::TIME);
    reg.register_base("A", "ampere", dimension::CURRENT);
    reg.register_base("K", "kelvin", dimension::TEMPERATURE);
    reg.register_base("mol", "mole", dimension::AMOUNT);
    reg.register_base("cd", "candela", dimension::LUMINOSITY);

    reg.alias("meter", "m");
    reg.alias("metre", "m");
    reg.alias("kilogram", "kg");
    reg.alias("second", "s");
    reg.alias("sec", "s");
    reg.alias("ampere", "A");
    reg.alias("amp", "A");
    reg.alias("kelvin", "K");
    reg.alias("mole", "mol");
    reg.alias("candela", "cd");
}

fn register_named_derived_units(reg: &mut UnitRegistry) {
    reg.register_derived("Hz", "hertz", Dimension::FREQUENCY);
    reg.register_derived("N", "newton", Dimension::FORCE);
    reg.register_derived("Pa", "pascal", Dimension::PRESSURE);
    reg.register_derived("J", "joule", Dimension::ENERGY);
    reg.register_derived("W", "watt", Dimension::POWER);
    reg.register_derived("C", "coulomb", Dimension::CHARGE);
    reg.register_derived("V", "volt", Dimension::VOLTAGE);
    reg.register_derived("F", "farad", Dimension::CAPACITANCE);
    reg.register_derived("Ω", "ohm", Dimension::RESISTANCE);
    reg.register_derived("S", "siemens", Dimension::CONDUCTANCE);
    reg.register_derived("Wb", "weber", Dimension::MAGNETIC_FLUX);
    reg.register_derived("T", "tesla", Dimension::MAGNETIC_FLUX_DENSITY);
    reg.register_derived("H", "henry", Dimension::INDUCTANCE);
    reg.register_derived("lm", "lumen", Dimension::LUMINOSITY);
    reg.register_derived("lx", "lux", Dimension::ILLUMINANCE);
    reg.register_derived("Bq", "becquerel", Dimension::FREQUENCY);
    reg.register_derived("Gy", "gray", Dimension::DOSE);
    reg.register_derived("Sv", "sievert", Dimension::DOSE);
    reg.register_derived("kat", "katal", Dimension::CATALYTIC_ACTIVITY);
    reg.register_derived("rad", "radian", Dimension::DIMENSIONLESS);
    reg.register_derived("sr", "steradian", Dimension::DIMENSIONLESS);

    reg.alias("hertz", "Hz");
    reg.alias("cps", "Hz");
    reg.alias("newton", "N");
    reg.alias("pascal", "Pa");
    reg.alias("joule", "J");
    reg.alias("watt", "W");
    reg.alias("coulomb", "C");
    reg.alias("volt", "V");
    reg.alias("farad", "F");
    reg.alias("ohm", "Ω");
    reg.alias("siemens", "S");
    reg.alias("weber", "Wb");
    reg.alias("tesla", "T");
    reg.alias("henry", "H");
    reg.alias("lumen", "lm");
    reg.alias("lux", "lx");
    reg.alias("becquerel", "Bq");
    reg.alias("gray", "Gy");
    reg.alias("sievert", "Sv");
    reg.alias("katal", "kat");
    reg.alias("radian", "rad");
    reg.alias("steradian", "sr");
}

fn register_length_units(reg: &mut UnitRegistry) {
    reg.register("in", "inch", Dimension::LENGTH, num("0.0254"));
    reg.register("ft", "foot", Dimension::LENGTH, num("0.3048"));
    reg.register("yd", "yard", Dimension::LENGTH, num("0.9144"));
    reg.register("mi", "mile", Dimension::LENGTH, num("1609.344"));
    reg.register("nmi", "nautical mile", Dimension::LENGTH, num("1852"));
    reg.register("mil", "mil", Dimension::LENGTH, num("0.0000254"));
    reg.register("hand", "hand", Dimension::LENGTH, num("0.1016"));
    reg.register("fathom", "fathom", Dimension::LENGTH, num("1.8288"));
    reg.register("rod", "rod", Dimension::LENGTH, num("5.0292"));
    reg.register("chain", "chain", Dimension::LENGTH, num("20.1168"));
    reg.register("furlong", "furlong", Dimension::LENGTH, num("201.168"));
    reg.register("league", "league", Dimension::LENGTH, num("4828.032"));
    reg.register("Å", "angstrom", Dimension::LENGTH, num("1e-10"));
    reg.register("au", "astronomical unit", Dimension::LENGTH, num("149597870700"));
    reg.register("ly", "light year", Dimension::LENGTH, num("9460730472580800"));
    reg.register("pc", "parsec", Dimension::LENGTH, num("30856775814913673"));
    reg.register("li", "link", Dimension::LENGTH, num("0.201168"));
    reg.register("cable", "cable length", Dimension::LENGTH, num("185.2"));
    reg.register("micron", "micron", Dimension::LENGTH, num("0.000001"));
    reg.register("fermi", "fermi", Dimension::LENGTH, num("1e-15"));
    reg.register("pica", "pica", Dimension::LENGTH, Number::from_ratio(254, 60_000));
    reg.register("point", "typographic point", Dimension::LENGTH, Number::from_ratio(254, 720_000));

    reg.alias("inch", "in");
    reg.alias("inches", "in");
    reg.alias("foot", "ft");
    reg.alias("feet", "ft");
    reg.alias("yard", "yd");
    reg.alias("mile", "mi");
    reg.alias("miles", "mi");
    reg.alias("thou", "mil");
    reg.alias("ftm", "fathom");
    reg.alias("angstrom", "Å");
    reg.alias("parsec", "pc");
}

fn register_mass_units(reg: &mut UnitRegistry) {
    reg.register("g", "gram", Dimension::MASS, num("0.001"));
    reg.register("t", "tonne", Dimension::MASS, num("1000"));
    reg.register("lb", "pound", Dimension::MASS, num("0.45359237"));
    reg.register("oz", "ounce", Dimension::MASS, num("0.028349523125"));
    reg.register("st", "stone", Dimension::MASS, num("6.35029318"));
    reg.register("ton", "short ton", Dimension::MASS, num("907.18474"));
    reg.register("lton", "long ton", Dimension::MASS, num("1016.0469088"));
    reg.register("cwt", "hundredweight", Dimension::MASS, num("45.359237"));
    reg.register("slug", "slug", Dimension::MASS, num("14.59390294"));
    reg.register("ct", "carat", Dimension::MASS, num("0.0002"));
    reg.register("gr", "grain", Dimension::MASS, num("0.00006479891"));
    reg.register("dr", "dram", Dimension::MASS, num("0.0017718451953125"));
    reg.register("ozt", "troy ounce", Dimension::MASS, num("0.0311034768"));
    reg.register("Da", "dalton", Dimension::MASS, num("1660539066.6e-36"));
    reg.register("quintal", "quintal", Dimension::MASS, num("100"));
    reg.register("qr", "quarter", Dimension::MASS, num("12.70058636"));

    reg.alias("gram", "g");
    reg.alias("tonne", "t");
    reg.alias("pound", "lb");
    reg.alias("pounds", "lb");
    reg.alias("lbs", "lb");
    reg.alias("ounce", "oz");
    reg.alias("stone", "st");
    reg.alias("carat", "ct");
    reg.alias("grain", "gr");
    reg.alias("u", "Da");
}

fn register_time_units(reg: &mut UnitRegistry) {
    reg.register("min", "minute", Dimension::TIME, num("60"));
    reg.register("h", "hour", Dimension::TIME, num("3600"));
    reg.register("d", "day", Dimension::TIME, num("86400"));
    reg.register("wk", "week", Dimension::TIME, num("604800"));
    reg.register("fortnight", "fortnight", Dimension::TIME, num("1209600"));
    reg.register("mo", "month", Dimension::TIME, num("2629746")); // mean Gregorian
    reg.register("yr", "year", Dimension::TIME, num("31556952")); // mean Gregorian
    reg.register("shake", "shake", Dimension::TIME, num("1e-8"));
    reg.register("decade", "decade", Dimension::TIME, num("315569520"));
    reg.register("century", "century", Dimension::TIME, num("3155695200"));

    reg.alias("minute", "min");
    reg.alias("hour", "h");
    reg.alias("hr", "h");
    reg.alias("day", "d");
    reg.alias("week", "wk");
    reg.alias("month", "mo");
    reg.alias("year", "yr");
}

fn register_temperature_units(reg: &mut UnitRegistry) {
    // Kelvin is the base; °R is proportional; °C/°F carry offsets.
    // base = value·factor + offset, exact rationals throughout.
    reg.register_affine("°C", "celsius", Number::one(), num("273.15"));
    reg.register_affine("°F", "fahrenheit", Number::from_ratio(5, 9), Number::from_ratio(45967, 180));
    reg.register("°R", "rankine", Dimension::TEMPERATURE, Number::from_ratio(5, 9));

    reg.alias("degC", "°C");
    reg.alias("celsius", "°C");
    reg.alias("degF", "°F");
    reg.alias("fahrenheit", "°F");
    reg.alias("degR", "°R");
    reg.alias("rankine", "°R");
}

fn register_area_units(reg: &mut UnitRegistry) {
    // Square forms of registered lengths come from the parser (in²,
    // sq ft); only genuinely distinct area units live here.
    reg.register("ha", "hectare", Dimension::AREA, num("10000"));
    reg.register("are", "are", Dimension::AREA, num("100"));
    reg.register("ac", "acre", Dimension::AREA, num("4046.8564224"));
    reg.register("b", "barn", Dimension::AREA, num("1e-28"));
    reg.register("rood", "rood", Dimension::AREA, num("1011.7141056"));

    reg.alias("hectare", "ha");
    reg.alias("acre", "ac");
    reg.alias("acres", "ac");
    reg.alias("barn", "b");
}

fn register_volume_units(reg: &mut UnitRegistry) {
    reg.register("L", "liter", Dimension::VOLUME, num("0.001"));
    reg.register("gal", "gallon", Dimension::VOLUME, num("0.003785411784"));
    reg.register("qt", "quart", Dimension::VOLUME, num("0.000946352946"));
    reg.register("pt", "pint", Dimension::VOLUME, num("0.000473176473"));
    reg.register("cup", "cup", Dimension::VOLUME, num("0.0002365882365"));
    reg.register("floz", "fluid ounce", Dimension::VOLUME, num("0.0000295735295625"));
    reg.register("tbsp", "tablespoon", Dimension::VOLUME, num("0.00001478676478125"));
    reg.register("tsp", "teaspoon", Dimension::VOLUME, num("0.00000492892159375"));
    reg.register("gill", "gill", Dimension::VOLUME, num("0.00011829411825"));
    reg.register("impgal", "imperial gallon", Dimension::VOLUME, num("0.00454609"));
    reg.register("imppt", "imperial pint", Dimension::VOLUME, num("0.00056826125"));
    reg.register("bbl", "oil barrel", Dimension::VOLUME, num("0.158987294928"));
    reg.register("bu", "bushel", Dimension::VOLUME, num("0.03523907016688"));
    reg.register("cord", "cord", Dimension::VOLUME, num("3.624556363776"));
    reg.register("cc", "cubic centimeter", Dimension::VOLUME, num("0.000001"));
    reg.register("minim", "minim", Dimension::VOLUME, num("0.000000061611519921875"));
    reg.register("peck", "peck", Dimension::VOLUME, num("0.00880976754172"));
    reg.register("hogshead", "hogshead", Dimension::VOLUME, num("0.238480942392"));

    reg.alias("l", "L");
    reg.alias("liter", "L");
    reg.alias("litre", "L");
    reg.alias("liters", "L");
    reg.alias("litres", "L");
    reg.alias("gallon", "gal");
    reg.alias("gallons", "gal");
    reg.alias("quart", "qt");
    reg.alias("pint", "pt");
    reg.alias("bushel", "bu");
}

fn register_velocity_units(reg: &mut UnitRegistry) {
    // Quotient forms (m/s, km/h, ft/s) come from the parser.
    reg.register("kn", "knot", Dimension::VELOCITY, Number::from_ratio(1852, 3600));
    reg.register("mph", "mile per hour", Dimension::VELOCITY, num("0.44704"));
    reg.register("c", "speed of light", Dimension::VELOCITY, num("299792458"));
    reg.register("mach", "mach", Dimension::VELOCITY, num("340.29")); // sea level
    reg.register("fps", "foot per second", Dimension::VELOCITY, num("0.3048"));

    reg.alias("knot", "kn");
    reg.alias("knots", "kn");
}

fn register_acceleration_units(reg: &mut UnitRegistry) {
    reg.register("g0", "standard gravity", Dimension::ACCELERATION, num("9.80665"));
    reg.register("Gal", "galileo", Dimension::ACCELERATION, num("0.01"));

    reg.alias("gee", "g0");
}

fn register_force_units(reg: &mut UnitRegistry) {
    reg.register("dyn", "dyne", Dimension::FORCE, num("0.00001"));
    reg.register("lbf", "pound-force", Dimension::FORCE, num("4.4482216152605"));
    reg.register("kgf", "kilogram-force", Dimension::FORCE, num("9.80665"));
    reg.register("kip", "kip", Dimension::FORCE, num("4448.2216152605"));
    reg.register("pdl", "poundal", Dimension::FORCE, num("0.138254954376"));
    reg.register("ozf", "ounce-force", Dimension::FORCE, num("0.2780138509537813"));
    reg.register("tf", "tonne-force", Dimension::FORCE, num("9806.65"));

    reg.alias("dyne", "dyn");
    reg.alias("poundal", "pdl");
}

fn register_energy_units(reg: &mut UnitRegistry) {
    reg.register("cal", "calorie", Dimension::ENERGY, num("4.184"));
    reg.register("kcal", "kilocalorie", Dimension::ENERGY, num("4184"));
    reg.register("Wh", "watt-hour", Dimension::ENERGY, num("3600"));
    reg.register("eV", "electronvolt", Dimension::ENERGY, num("1602176634e-28"));
    reg.register("BTU", "British thermal unit", Dimension::ENERGY, num("1055.05585262"));
    reg.register("erg", "erg", Dimension::ENERGY, num("1e-7"));
    reg.register("ftlb", "foot-pound", Dimension::ENERGY, num("1.3558179483314"));
    reg.register("therm", "therm", Dimension::ENERGY, num("105505585.262"));
    reg.register("Ry", "rydberg", Dimension::ENERGY, num("2.1798723611030e-18"));
    reg.register("Eh", "hartree", Dimension::ENERGY, num("4.3597447222071e-18"));

    reg.alias("calorie", "cal");
    reg.alias("Cal", "kcal");
    reg.alias("Btu", "BTU");
}

fn register_power_units(reg: &mut UnitRegistry) {
    reg.register("hp", "horsepower", Dimension::POWER, num("745.699872"));
    reg.register("PS", "metric horsepower", Dimension::POWER, num("735.49875"));
    reg.register("hpE", "electric horsepower", Dimension::POWER, num("746"));
    reg.register("hpS", "boiler horsepower", Dimension::POWER, num("9812.5"));
    reg.register("RT", "ton of refrigeration", Dimension::POWER, num("3516.8528420667"));

    reg.alias("horsepower", "hp");
}

fn register_pressure_units(reg: &mut UnitRegistry) {
    reg.register("bar", "bar", Dimension::PRESSURE, num("100000"));
    reg.register("atm", "atmosphere", Dimension::PRESSURE, num("101325"));
    reg.register("at", "technical atmosphere", Dimension::PRESSURE, num("98066.5"));
    reg.register("psi", "pound per square inch", Dimension::PRESSURE, num("6894.757293168"));
    reg.register("torr", "torr", Dimension::PRESSURE, Number::from_ratio(101325, 760));
    reg.register("Ba", "barye", Dimension::PRESSURE, num("0.1"));
    reg.register("pz", "pieze", Dimension::PRESSURE, num("1000"));

    // Column bases: pressure per unit column height. The parser
    // splits inHg/mmH₂O/ftAq into length·column products.
    reg.register("Hg", "mercury column", Dimension::PRESSURE_GRADIENT, num("133322.387415"));
    reg.register("H2O", "water column", Dimension::PRESSURE_GRADIENT, num("9806.65"));
    reg.register("O2", "oxygen column", Dimension::PRESSURE_GRADIENT, num("11189.4"));

    reg.alias("atmosphere", "atm");
    reg.alias("H₂O", "H2O");
    reg.alias("Aq", "H2O");
    reg.alias("O₂", "O2");
}

fn register_viscosity_units(reg: &mut UnitRegistry) {
    let (dim, factor) = reg.compose(&[("Pa", 1), ("s", 1)]);
    reg.register("P", "poise", dim, factor.mul(&num("0.1")));
    reg.register("St", "stokes", Dimension::KINEMATIC_VISCOSITY, num("0.0001"));

    reg.alias("poise", "P");
    reg.alias("stokes", "St");
}

fn register_magnetism_units(reg: &mut UnitRegistry) {
    reg.register("G", "gauss", Dimension::MAGNETIC_FLUX_DENSITY, num("0.0001"));
    reg.register("Mx", "maxwell", Dimension::MAGNETIC_FLUX, num("1e-8"));
    reg.register(
        "Oe",
        "oersted",
        Dimension::new([-1, 0, 0, 1, 0, 0, 0]),
        num("79.57747154594767"), // 1000/4π
    );

    reg.alias("gauss", "G");
    reg.alias("maxwell", "Mx");
    reg.alias("oersted", "Oe");
}

fn register_radiation_units(reg: &mut UnitRegistry) {
    reg.register("Ci", "curie", Dimension::FREQUENCY, num("3.7e10"));
    reg.register("R", "roentgen", Dimension::new([0, -1, 1, 1, 0, 0, 0]), num("0.000258"));
    reg.register("rd", "rad (absorbed dose)", Dimension::DOSE, num("0.01"));
    reg.register("rem", "rem", Dimension::DOSE, num("0.01"));

    reg.alias("curie", "Ci");
    reg.alias("roentgen", "R");
}

fn register_electrical_units(reg: &mut UnitRegistry) {
    let (dim, factor) = reg.compose(&[("A", 1), ("h", 1)]);
    reg.register("Ah", "ampere-hour", dim, factor);

    reg.alias("ohms", "Ω");
}

fn register_data_units(reg: &mut UnitRegistry) {
    // Data sizes share the zero vector; conversions among them are by
    // factor only.
    reg.register("bit", "bit", Dimension::DIMENSIONLESS, Number::one());
    reg.register("B", "byte", Dimension::DIMENSIONLESS, num("8"));
    reg.register("KiB", "kibibyte", Dimension::DIMENSIONLESS, num("8192"));
    reg.register("MiB", "mebibyte", Dimension::DIMENSIONLESS, num("8388608"));
    reg.register("GiB", "gibibyte", Dimension::DIMENSIONLESS, num("8589934592"));
    reg.register("TiB", "tebibyte", Dimension::DIMENSIONLESS, num("8796093022208"));
    reg.register("PiB", "pebibyte", Dimension::DIMENSIONLESS, num("9007199254740992"));

    reg.alias("byte", "B");
    reg.alias("bytes", "B");
    reg.alias("bits", "bit");
}

fn register_angle_units(reg: &mut UnitRegistry) {
    // Angles share the zero vector with rad/sr from the derived table.
    reg.register("°", "degree", Dimension::DIMENSIONLESS, num("0.017453292519943295"));
    reg.register("′", "arcminute", Dimension::DIMENSIONLESS, num("0.0002908882086657216"));
    reg.register("″", "arcsecond", Dimension::DIMENSIONLESS, num("0.000004848136811095360"));
    reg.register("gon", "gradian", Dimension::DIMENSIONLESS, num("0.015707963267948967"));
    reg.register("turn", "turn", Dimension::DIMENSIONLESS, num("6.283185307179586"));
    reg.register("rpm", "revolution per minute", Dimension::FREQUENCY, Number::from_ratio(1, 60));

    reg.alias("deg", "°");
    reg.alias("arcmin", "′");
    reg.alias("arcsec", "″");
    reg.alias("grad", "gon");
    reg.alias("rev", "turn");
}

fn register_photometry_units(reg: &mut UnitRegistry) {
    reg.register("nit", "nit", Dimension::LUMINANCE, Number::one());
    reg.register("sb", "stilb", Dimension::LUMINANCE, num("10000"));
    reg.register("asb", "apostilb", Dimension::LUMINANCE, num("0.3183098861837907"));
    reg.register("fL", "footlambert", Dimension::LUMINANCE, num("3.426259099635391"));
    reg.register("ph", "phot", Dimension::ILLUMINANCE, num("10000"));
    reg.register("fc", "footcandle", Dimension::ILLUMINANCE, num("10.763910416709722"));

    reg.alias("stilb", "sb");
    reg.alias("phot", "ph");
}

fn register_dimensionless_units(reg: &mut UnitRegistry) {
    reg.register("dB", "decibel", Dimension::DIMENSIONLESS, Number::one());
    reg.register("Np", "neper", Dimension::DIMENSIONLESS, Number::one());
    reg.register("%", "percent", Dimension::DIMENSIONLESS, num("0.01"));
    reg.register("ppm", "part per million", Dimension::DIMENSIONLESS, num("1e-6"));
    reg.register("ppb", "part per billion", Dimension::DIMENSIONLESS, num("1e-9"));

    reg.alias("percent", "%");
}
