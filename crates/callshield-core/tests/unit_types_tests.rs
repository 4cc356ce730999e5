//! Unit tests for CallShield domain types

use callshield_core::types::blacklist::normalize_number;
use callshield_core::*;
use chrono::Utc;

// =============================================================================
// Rule Tests
// =============================================================================

#[test]
fn test_every_valid_combination_accepted() -> anyhow::Result<()> {
    for level in 1..=5 {
        for action in ["alert", "block"] {
            let rule = NewRule::new("冻结", level, action).into_rule(1, Utc::now())?;
            assert_eq!(rule.risk_level.value() as i64, level);
            assert_eq!(rule.action.as_str(), action);
        }
    }
    Ok(())
}

#[test]
fn test_rule_rejections_are_validation_errors() {
    let cases = [
        NewRule::new("", 3, "alert"),
        NewRule::new("冻结", 0, "alert"),
        NewRule::new("冻结", 6, "alert"),
        NewRule::new("冻结", 3, "drop"),
    ];

    for case in cases {
        let err = case.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)), "{:?}", err);
    }
}

#[test]
fn test_rule_round_trips_through_json() -> anyhow::Result<()> {
    let rule = NewRule::new("安全账户", 5, "block")
        .with_description("冒充公检法")
        .into_rule(11, Utc::now())?;

    let json = serde_json::to_string(&rule)?;
    let back: Rule = serde_json::from_str(&json)?;
    assert_eq!(back, rule);
    Ok(())
}

// =============================================================================
// Blacklist Tests
// =============================================================================

#[test]
fn test_blacklist_entry_from_console_payload() -> anyhow::Result<()> {
    let payload: NewBlacklistEntry = serde_json::from_value(serde_json::json!({
        "number": "17012345678",
        "description": "多次举报",
        "risk_level": 5,
        "source": "manual_admin"
    }))?;

    let entry = payload.into_entry(1, Utc::now())?;
    assert_eq!(entry.number, "17012345678");
    assert_eq!(entry.source, "manual_admin");
    Ok(())
}

#[test]
fn test_number_must_be_digits() {
    assert!(normalize_number("1701234567x").is_err());
    assert!(normalize_number("").is_err());
}

// =============================================================================
// Verdict Tests
// =============================================================================

#[test]
fn test_block_dominates_alert() {
    let reduced = [RuleAction::Alert, RuleAction::Block, RuleAction::Alert]
        .into_iter()
        .map(Verdict::from)
        .fold(Verdict::Pass, Verdict::max);
    assert_eq!(reduced, Verdict::Block);
}
