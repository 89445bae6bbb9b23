pub mod api;
mod pages;

/// Products sold through the portal, keyed by URL slug.
///
/// The slug picks the intake form and handler behavior; the reference prefix
/// and product tag flow into the gateway payload (`REFERENCE` and `USER1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benefit {
    ChauffeurDrive,
    Safari,
}

impl Benefit {
    pub const ALL: [Benefit; 2] = [Benefit::ChauffeurDrive, Benefit::Safari];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "benefit-a" => Some(Self::ChauffeurDrive),
            "benefit-b" => Some(Self::Safari),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::ChauffeurDrive => "benefit-a",
            Self::Safari => "benefit-b",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ChauffeurDrive => "Chauffeur Drive",
            Self::Safari => "Luxury African Safari",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::ChauffeurDrive => "Premium chauffeur service payment",
            Self::Safari => "Luxury safari experience payment",
        }
    }

    pub fn reference_prefix(&self) -> &'static str {
        match self {
            Self::ChauffeurDrive => "CHAUFFEUR-DRIVE",
            Self::Safari => "SAFARI",
        }
    }

    pub fn product_tag(&self) -> &'static str {
        match self {
            Self::ChauffeurDrive => "CHAUFFEUR_DRIVE",
            Self::Safari => "LUXURY_SAFARI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Approved,
    Declined,
    Pending,
}

impl TransactionStatus {
    /// `1` approved and `2` declined are the only settled codes the gateway
    /// documents; everything else (including `0` and `4`) renders as pending
    /// until the notify leg delivers the authoritative result.
    pub fn classify(code: &str) -> Self {
        match code {
            "1" => Self::Approved,
            "2" => Self::Declined,
            _ => Self::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trip() {
        for benefit in Benefit::ALL {
            assert_eq!(Benefit::from_slug(benefit.slug()), Some(benefit));
        }
        assert_eq!(Benefit::from_slug("benefit-c"), None);
        assert_eq!(Benefit::from_slug("return"), None);
    }

    #[test]
    fn status_classification() {
        assert_eq!(TransactionStatus::classify("1"), TransactionStatus::Approved);
        assert_eq!(TransactionStatus::classify("2"), TransactionStatus::Declined);
        assert_eq!(TransactionStatus::classify("0"), TransactionStatus::Pending);
        assert_eq!(TransactionStatus::classify("4"), TransactionStatus::Pending);
        assert_eq!(TransactionStatus::classify("7"), TransactionStatus::Pending);
        assert_eq!(TransactionStatus::classify(""), TransactionStatus::Pending);
    }
}
