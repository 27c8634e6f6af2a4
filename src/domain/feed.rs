use std::fmt;
use std::str::FromStr;

/// One of the three ranked ID lists the upstream service publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Top,
    New,
    Best,
}

impl FeedKind {
    pub const ALL: [FeedKind; 3] = [FeedKind::Top, FeedKind::New, FeedKind::Best];

    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            FeedKind::Top => "topstories.json",
            FeedKind::New => "newstories.json",
            FeedKind::Best => "beststories.json",
        }
    }

    /// The other two feed kinds, used for background preloading.
    pub fn others(&self) -> [FeedKind; 2] {
        match self {
            FeedKind::Top => [FeedKind::New, FeedKind::Best],
            FeedKind::New => [FeedKind::Top, FeedKind::Best],
            FeedKind::Best => [FeedKind::Top, FeedKind::New],
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedKind::Top => "top",
            FeedKind::New => "new",
            FeedKind::Best => "best",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(FeedKind::Top),
            "new" => Ok(FeedKind::New),
            "best" => Ok(FeedKind::Best),
            other => Err(format!("unknown feed kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(FeedKind::Top.endpoint(), "topstories.json");
        assert_eq!(FeedKind::New.endpoint(), "newstories.json");
        assert_eq!(FeedKind::Best.endpoint(), "beststories.json");
    }

    #[test]
    fn test_parse_roundtrip() {
        for kind in FeedKind::ALL {
            assert_eq!(kind.to_string().parse::<FeedKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("hot".parse::<FeedKind>().is_err());
    }

    #[test]
    fn test_others_excludes_self() {
        for kind in FeedKind::ALL {
            assert!(!kind.others().contains(&kind));
        }
    }
}
