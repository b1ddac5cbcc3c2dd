//! Built-in academy templates, used whenever no valid template bank is
//! configured. Five per level, fifteen total.

use uuid::Uuid;

use crate::domain::{EmailTemplate, TemplateSource};

fn tpl(level: &str, sender: &str, subject: &str, snippet: &str, is_phish: bool) -> EmailTemplate {
  EmailTemplate {
    id: Uuid::new_v4().to_string(),
    level: level.into(),
    sender: sender.into(),
    subject: subject.into(),
    snippet: snippet.into(),
    is_phish,
    source: TemplateSource::Seed,
  }
}

/// Minimal set of built-in templates that guarantee the academy is playable
/// even without an external template bank.
pub fn seed_templates() -> Vec<EmailTemplate> {
  vec![
    // easy
    tpl("easy", "admin@bank.com", "Verify your account", "Click here to update…", true),
    tpl("easy", "newsletter@shop.com", "Your weekly deals", "Check out our latest offers", false),
    tpl("easy", "security@service.com", "Password reset", "We detected a login…", true),
    tpl("easy", "friend@example.com", "Lunch tomorrow?", "Hey, want to grab…", false),
    tpl("easy", "alerts@store.com", "Order shipped!", "Your package is on the way", false),
    // medium
    tpl("medium", "support@micros0ft.com", "Unusual sign-in activity", "Review the IP address immediately", true),
    tpl("medium", "hr@company.com", "Updated handbook", "Please acknowledge receipt", false),
    tpl("medium", "it-helpdesk@corp.com", "Urgent: MFA reset", "Use the attachment to re-enroll", true),
    tpl("medium", "events@meetup.com", "Tonight’s event reminder", "Starts at 6pm—see you there!", false),
    tpl("medium", "payroll@corp.com", "Direct deposit failed", "Confirm account within 24h", true),
    // hard
    tpl("hard", "ceo@company.com", "Quick favor", "Are you at your desk right now?", true),
    tpl("hard", "noreply@github.com", "Security alert for your account", "Token used from new location", false),
    tpl("hard", "vendor@invoices.io", "Invoice 8471 due", "PO attached—please process", true),
    tpl("hard", "ops@cloudprovider.com", "Maintenance window notice", "No action required", false),
    tpl("hard", "legal@corp.com", "Policy acknowledgement overdue", "Sign by EOD to remain compliant", true),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn five_per_level() {
    let seeds = seed_templates();
    assert_eq!(seeds.len(), 15);
    for level in ["easy", "medium", "hard"] {
      assert_eq!(seeds.iter().filter(|t| t.level == level).count(), 5);
    }
  }

  #[test]
  fn ids_are_unique_and_source_is_seed() {
    let seeds = seed_templates();
    let mut ids = std::collections::HashSet::new();
    for t in &seeds {
      assert!(ids.insert(t.id.clone()), "duplicate template id {}", t.id);
      assert_eq!(t.source, TemplateSource::Seed);
    }
  }
}
