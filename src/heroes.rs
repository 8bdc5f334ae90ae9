/// Maps a Deadlock hero ID to its display name. The ID space has gaps;
/// anything the table does not know renders as `Unknown (<id>)`.
pub fn hero_name(hero_id: u32) -> String {
    let name = match hero_id {
        1 => "Infernus",
        2 => "Seven",
        3 => "Vindicta",
        4 => "Lady Geist",
        6 => "Abrams",
        7 => "Wraith",
        8 => "McGinnis",
        10 => "Paradox",
        11 => "Dynamo",
        12 => "Kelvin",
        13 => "Haze",
        14 => "Holliday",
        15 => "Bebop",
        16 => "Calico",
        17 => "Grey Talon",
        18 => "Mo & Krill",
        19 => "Shiv",
        20 => "Ivy",
        21 => "Kali",
        25 => "Warden",
        27 => "Yamato",
        31 => "Lash",
        35 => "Viscous",
        38 => "Gunslinger",
        39 => "The Boss",
        47 => "Tokamak",
        48 => "Wrecker",
        49 => "Rutger",
        50 => "Pocket",
        51 => "Thumper",
        52 => "Mirage",
        53 => "Fathom",
        54 => "Cadence",
        56 => "Bomber",
        57 => "Shield Guy",
        58 => "Vyper",
        59 => "Vandal",
        60 => "Sinclair",
        61 => "Trapper",
        62 => "Raven",
        63 => "Mina",
        64 => "Drifter",
        65 => "Venator",
        66 => "Victor",
        67 => "Paige",
        68 => "Boho",
        69 => "The Doorman",
        70 => "Skyrunner",
        71 => "Swan",
        72 => "Billy",
        73 => "Druid",
        74 => "Graf",
        75 => "Fortuna",
        76 => "Graves",
        77 => "Apollo",
        78 => "Airheart",
        79 => "Rem",
        80 => "Silver",
        81 => "Celeste",
        82 => "Opera",
        _ => return format!("Unknown ({})", hero_id),
    };
    name.to_string()
}
