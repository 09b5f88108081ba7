//! Update account preferences

use super::Context;
use crate::error::AccountError;
use crate::output::print_preferences;
use crate::stats::UserAccount;
use anyhow::Result;
use std::fmt;
use std::io::Write;
use tracing::info;

/// Requested preference changes; `None` leaves a value alone
#[derive(Clone, Default)]
pub struct PreferenceUpdate {
    pub dark_mode: Option<bool>,
    pub high_contrast: Option<bool>,
    pub hard_mode: Option<bool>,
    pub reset_stats: bool,
    /// Protect the account with this password from now on
    pub new_password: Option<String>,
}

impl fmt::Debug for PreferenceUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceUpdate")
            .field("dark_mode", &self.dark_mode)
            .field("high_contrast", &self.high_contrast)
            .field("hard_mode", &self.hard_mode)
            .field("reset_stats", &self.reset_stats)
            .field("new_password", &self.new_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl PreferenceUpdate {
    fn is_empty(&self) -> bool {
        self.dark_mode.is_none()
            && self.high_contrast.is_none()
            && self.hard_mode.is_none()
            && !self.reset_stats
            && self.new_password.is_none()
    }

    fn apply(&self, account: &mut UserAccount) -> Result<(), AccountError> {
        let prefs = &mut account.preferences;
        if let Some(on) = self.dark_mode {
            prefs.dark_mode = on;
        }
        if let Some(on) = self.high_contrast {
            prefs.high_contrast = on;
        }
        if let Some(on) = self.hard_mode {
            prefs.hard_mode = on;
        }
        if self.reset_stats {
            account.statistics.reset();
        }
        if let Some(password) = &self.new_password {
            account.set_password(password)?;
        }
        Ok(())
    }
}

/// Apply `update` to the configured account and print the result
///
/// # Errors
///
/// Returns an error if the account cannot be loaded or saved, or writing fails.
pub fn run_settings<W: Write>(
    ctx: &Context,
    update: &PreferenceUpdate,
    out: &mut W,
) -> Result<UserAccount> {
    let mut account = ctx.account()?;

    if !update.is_empty() {
        update.apply(&mut account)?;
        ctx.accounts.save(&account)?;
        info!(user = account.username(), ?update, "updated settings");
    }

    print_preferences(out, account.username(), account.preferences)?;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;
    use crate::engine::FixedClock;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordList;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn context() -> Context {
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        Context::with_parts(
            "carol",
            Arc::new(WordList::new()),
            Arc::new(MemoryStore::new()),
            clock,
        )
    }

    #[test]
    fn updates_only_requested_flags() {
        let ctx = context();
        let mut out = Vec::new();

        run_settings(
            &ctx,
            &PreferenceUpdate {
                dark_mode: Some(true),
                ..PreferenceUpdate::default()
            },
            &mut out,
        )
        .unwrap();
        let account = run_settings(
            &ctx,
            &PreferenceUpdate {
                hard_mode: Some(true),
                ..PreferenceUpdate::default()
            },
            &mut out,
        )
        .unwrap();

        assert!(account.preferences.dark_mode);
        assert!(account.preferences.hard_mode);
        assert!(!account.preferences.high_contrast);
    }

    #[test]
    fn reset_stats_clears_counters() {
        let ctx = context();
        let mut account = ctx.accounts.load("carol", None).unwrap();
        account
            .statistics
            .record_outcome(BoardConfig::CLASSIC, true, 4)
            .unwrap();
        ctx.accounts.save(&account).unwrap();

        let mut out = Vec::new();
        let account = run_settings(
            &ctx,
            &PreferenceUpdate {
                reset_stats: true,
                ..PreferenceUpdate::default()
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(account.statistics.games_played(), 0);
        assert_eq!(ctx.accounts.load("carol", None).unwrap().statistics.games_played(), 0);
    }

    #[test]
    fn new_password_protects_the_account() {
        let mut ctx = context();
        let mut out = Vec::new();
        run_settings(
            &ctx,
            &PreferenceUpdate {
                new_password: Some("s3cret".to_string()),
                ..PreferenceUpdate::default()
            },
            &mut out,
        )
        .unwrap();

        let err = run_settings(&ctx, &PreferenceUpdate::default(), &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AccountError>(),
            Some(&AccountError::PasswordRequired("carol".to_string()))
        );

        ctx.password = Some("s3cret".to_string());
        assert!(run_settings(&ctx, &PreferenceUpdate::default(), &mut out).is_ok());
    }

    #[test]
    fn debug_output_hides_the_new_password() {
        let update = PreferenceUpdate {
            new_password: Some("s3cret".to_string()),
            ..PreferenceUpdate::default()
        };
        let text = format!("{update:?}");
        assert!(text.contains("<redacted>"));
        assert!(!text.contains("s3cret"));
    }
}
