/// Victim demographic cluster derived from raw gender tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderCluster {
    AdultFemale,
    AdultMale,
    Youth,
    Other,
}

impl GenderCluster {
    /// Buckets a raw demographic token. Unrecognized tokens land in `Other`
    /// rather than being dropped.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "frau" => Self::AdultFemale,
            "mann" => Self::AdultMale,
            "junge" | "mädchen" | "jugendliche" => Self::Youth,
            _ => Self::Other,
        }
    }

    /// Canonical facet value. Display strings live in the locale dictionary;
    /// the engine only ever deals in these values.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdultFemale => "Adult Female",
            Self::AdultMale => "Adult Male",
            Self::Youth => "Youth",
            Self::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Adult Female" => Some(Self::AdultFemale),
            "Adult Male" => Some(Self::AdultMale),
            "Youth" => Some(Self::Youth),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Time-of-day cluster derived from an `HH:MM`-like string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeCluster {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeCluster {
    /// Buckets the hour component of a raw time string.
    ///
    /// The branches are tested in Morning → Afternoon → Evening → Night
    /// priority order; a malformed hour fails every range check and falls
    /// through to `Night`, matching the upstream ternary chain.
    pub fn from_time(raw: &str) -> Self {
        let hour = raw.split(':').next().and_then(|h| h.trim().parse::<i64>().ok());
        match hour {
            Some(h) if (6..12).contains(&h) => Self::Morning,
            Some(h) if (12..18).contains(&h) => Self::Afternoon,
            Some(h) if (18..24).contains(&h) => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Morning" => Some(Self::Morning),
            "Afternoon" => Some(Self::Afternoon),
            "Evening" => Some(Self::Evening),
            "Night" => Some(Self::Night),
            _ => None,
        }
    }
}
