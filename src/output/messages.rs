//! Localized labels and messages.

use strum_macros::EnumIter;

use crate::config::Language;

/// Labeled lines of the WHOIS report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ReportField {
    /// Domain that was looked up
    Domain,
    /// Registrant organization
    Organization,
    /// Registrant country
    Country,
    /// Creation date
    Created,
    /// Last update date
    Updated,
    /// Expiration date
    Expires,
    /// Domain status
    Status,
    /// Nameservers
    NameServers,
    /// Estimated age
    DomainAge,
}

impl Language {
    /// Placeholder printed for absent values.
    pub fn unknown(self) -> &'static str {
        match self {
            Language::En => "unknown",
            Language::Ja => "不明",
        }
    }

    /// Label (with its leading emoji) for a report line.
    pub fn label(self, field: ReportField) -> &'static str {
        match (self, field) {
            (Language::En, ReportField::Domain) => "🌐 Domain",
            (Language::En, ReportField::Organization) => "🏢 Registrant organization",
            (Language::En, ReportField::Country) => "🌍 Registrant country",
            (Language::En, ReportField::Created) => "📅 Created",
            (Language::En, ReportField::Updated) => "🔄 Last updated",
            (Language::En, ReportField::Expires) => "⏳ Expires",
            (Language::En, ReportField::Status) => "🔗 Status",
            (Language::En, ReportField::NameServers) => "🧑‍💻 Name servers",
            (Language::En, ReportField::DomainAge) => "📈 Domain age",
            (Language::Ja, ReportField::Domain) => "🌐 ドメイン",
            (Language::Ja, ReportField::Organization) => "🏢 登録組織",
            (Language::Ja, ReportField::Country) => "🌍 登録国",
            (Language::Ja, ReportField::Created) => "📅 登録日",
            (Language::Ja, ReportField::Updated) => "🔄 最終更新日",
            (Language::Ja, ReportField::Expires) => "⏳ 有効期限",
            (Language::Ja, ReportField::Status) => "🔗 ステータス",
            (Language::Ja, ReportField::NameServers) => "🧑‍💻 ネームサーバー",
            (Language::Ja, ReportField::DomainAge) => "📈 ドメイン年齢",
        }
    }

    /// Domain age with its unit.
    pub fn days(self, days: i64) -> String {
        match self {
            Language::En if days == 1 => "1 day".to_string(),
            Language::En => format!("{days} days"),
            Language::Ja => format!("{days} 日"),
        }
    }

    pub(crate) fn invalid_format(self, email: &str) -> String {
        match self {
            Language::En => format!("❌ Invalid email address format: {email}"),
            Language::Ja => format!("❌ メールアドレス形式が正しくありません: {email}"),
        }
    }

    pub(crate) fn valid_format(self, email: &str) -> String {
        match self {
            Language::En => format!("✅ Email address format is valid: {email}"),
            Language::Ja => format!("✅ メールアドレス形式が正しい: {email}"),
        }
    }

    pub(crate) fn looking_up(self, domain: &str) -> String {
        match self {
            Language::En => format!("🔎 Looking up WHOIS information for {domain}..."),
            Language::Ja => format!("🔎 ドメイン {domain} のWHOIS情報を検索中..."),
        }
    }

    pub(crate) fn lookup_failed(self, status: u16) -> String {
        match self {
            Language::En => format!("❌ WHOIS lookup failed: HTTP {status}"),
            Language::Ja => format!("❌ WHOIS検索失敗: HTTP {status}"),
        }
    }

    pub(crate) fn trusted(self) -> &'static str {
        match self {
            Language::En => "✅ The domain has valid registrant information. It can be trusted.",
            Language::Ja => "✅ ドメインに有効な登録者情報があります。信頼できます。",
        }
    }

    pub(crate) fn manual_review(self) -> &'static str {
        match self {
            Language::En => {
                "⚠️ Registration information may be incomplete. Please verify manually."
            }
            Language::Ja => "⚠️ 登録情報が不足している可能性があります。手動でご確認ください。",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_language_labels_every_field() {
        for language in Language::iter() {
            for field in ReportField::iter() {
                assert!(
                    !language.label(field).is_empty(),
                    "{:?} has no label for {:?}",
                    language,
                    field
                );
            }
            assert!(!language.unknown().is_empty());
            assert!(!language.trusted().is_empty());
            assert!(!language.manual_review().is_empty());
        }
    }

    #[test]
    fn test_messages_embed_their_arguments() {
        for language in Language::iter() {
            assert!(language.invalid_format("bad email").contains("bad email"));
            assert!(language.valid_format("a@b.co").contains("a@b.co"));
            assert!(language.looking_up("example.com").contains("example.com"));
            assert!(language.lookup_failed(404).contains("HTTP 404"));
        }
    }

    #[test]
    fn test_days_units() {
        assert_eq!(Language::En.days(1), "1 day");
        assert_eq!(Language::En.days(400), "400 days");
        assert_eq!(Language::Ja.days(400), "400 日");
    }
}
