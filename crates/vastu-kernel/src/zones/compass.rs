//! The 32-point compass table and the 8 main sectors.

/// `(code, full name)` for each of the 32 compass points, clockwise from North.
pub const COMPASS_POINTS: [(&str, &str); 32] = [
    ("N", "North"),
    ("NbE", "North by East"),
    ("NNE", "North-Northeast"),
    ("NEbN", "Northeast by North"),
    ("NE", "Northeast"),
    ("NEbE", "Northeast by East"),
    ("ENE", "East-Northeast"),
    ("EbN", "East by North"),
    ("E", "East"),
    ("EbS", "East by South"),
    ("ESE", "East-Southeast"),
    ("SEbE", "Southeast by East"),
    ("SE", "Southeast"),
    ("SEbS", "Southeast by South"),
    ("SSE", "South-Southeast"),
    ("SbE", "South by East"),
    ("S", "South"),
    ("SbW", "South by West"),
    ("SSW", "South-Southwest"),
    ("SWbS", "Southwest by South"),
    ("SW", "Southwest"),
    ("SWbW", "Southwest by West"),
    ("WSW", "West-Southwest"),
    ("WbS", "West by South"),
    ("W", "West"),
    ("WbN", "West by North"),
    ("WNW", "West-Northwest"),
    ("NWbW", "Northwest by West"),
    ("NW", "Northwest"),
    ("NWbN", "Northwest by North"),
    ("NNW", "North-Northwest"),
    ("NbW", "North by West"),
];

/// One of the 8 main compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sector {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Sector {
    /// All sectors in clockwise order from North.
    pub const ALL: [Sector; 8] = [
        Sector::North,
        Sector::NorthEast,
        Sector::East,
        Sector::SouthEast,
        Sector::South,
        Sector::SouthWest,
        Sector::West,
        Sector::NorthWest,
    ];

    /// Sector at clockwise position `i` (taken modulo 8).
    #[inline]
    pub fn from_index(i: usize) -> Sector {
        Self::ALL[i % Self::ALL.len()]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Sector::North => "North",
            Sector::NorthEast => "Northeast",
            Sector::East => "East",
            Sector::SouthEast => "Southeast",
            Sector::South => "South",
            Sector::SouthWest => "Southwest",
            Sector::West => "West",
            Sector::NorthWest => "Northwest",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Sector::North => "N",
            Sector::NorthEast => "NE",
            Sector::East => "E",
            Sector::SouthEast => "SE",
            Sector::South => "S",
            Sector::SouthWest => "SW",
            Sector::West => "W",
            Sector::NorthWest => "NW",
        }
    }

    /// Parse a full name or a code, ignoring case, spaces, dashes and underscores.
    /// Unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Sector> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL.into_iter().find(|s| {
            key == s.code().to_ascii_lowercase() || key == s.name().to_ascii_lowercase()
        })
    }
}
