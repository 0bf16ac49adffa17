//! Letter-of-credit expiry warnings.

use chrono::NaiveDate;
use serde::Serialize;

/// How close an LC is to (or past) expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LcAlertLevel {
    Expired,
    /// Seven days or fewer.
    Critical,
    /// Fifteen days or fewer.
    Warning,
    /// Thirty days or fewer.
    Notice,
}

impl LcAlertLevel {
    /// CSS classes for the alert chip.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Expired | Self::Critical => "text-red-600 bg-red-50",
            Self::Warning => "text-orange-600 bg-orange-50",
            Self::Notice => "text-yellow-600 bg-yellow-50",
        }
    }
}

/// An LC expiry alert with its display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LcAlert {
    pub level: LcAlertLevel,
    /// Days until expiry; negative once expired.
    pub days: i64,
    pub message: String,
}

/// Alert for an LC expiring within 30 days (or already expired).
#[must_use]
pub fn lc_expiry_alert(expiry: Option<NaiveDate>, today: NaiveDate) -> Option<LcAlert> {
    let days = (expiry? - today).num_days();
    let (level, message) = if days < 0 {
        (LcAlertLevel::Expired, format!("LC EXPIRED {} days ago", -days))
    } else if days <= 7 {
        (LcAlertLevel::Critical, format!("LC expires in {days} days!"))
    } else if days <= 15 {
        (LcAlertLevel::Warning, format!("LC expires in {days} days"))
    } else if days <= 30 {
        (LcAlertLevel::Notice, format!("LC expires in {days} days"))
    } else {
        return None;
    };
    Some(LcAlert {
        level,
        days,
        message,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn alert(offset: i64) -> Option<LcAlert> {
        lc_expiry_alert(Some(today() + Duration::days(offset)), today())
    }

    #[test]
    fn test_expired() {
        let alert = alert(-3).unwrap();
        assert_eq!(alert.level, LcAlertLevel::Expired);
        assert_eq!(alert.message, "LC EXPIRED 3 days ago");
    }

    #[test]
    fn test_levels() {
        assert_eq!(alert(0).unwrap().message, "LC expires in 0 days!");
        assert_eq!(alert(7).unwrap().level, LcAlertLevel::Critical);
        assert_eq!(alert(8).unwrap().level, LcAlertLevel::Warning);
        assert_eq!(alert(15).unwrap().message, "LC expires in 15 days");
        assert_eq!(alert(30).unwrap().level, LcAlertLevel::Notice);
        assert!(alert(31).is_none());
    }

    #[test]
    fn test_no_expiry() {
        assert!(lc_expiry_alert(None, today()).is_none());
    }
}
