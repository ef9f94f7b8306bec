//! Sample trips shown on the Trips screen. Display only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub label: &'static str,
}

pub const SAMPLE_TRIPS: [Trip; 3] = [
    Trip {
        label: "Centro → Terminal",
    },
    Trip {
        label: "Parque → Estadio",
    },
    Trip {
        label: "Universidad → Mall",
    },
];
