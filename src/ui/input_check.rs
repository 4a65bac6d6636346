//! Input validation checks for forms.
//!
//! An [`InputCheckSet`] holds the checks of one screen. The screen itself
//! implements [`InputCheckHandler`]: it knows how to read the text of an input
//! and how to show the status of a check. Running the checks at the right
//! time (for example whenever an input changes) is up to the screen; input
//! should not be accepted while [`InputCheckSet::failed_checks`] yields
//! anything.

use crate::proxy::ProxyString;
use crate::source::has_network_protocol;

/// Result of an input check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckStatus {
    /// The input is valid.
    #[default]
    Ok,
    /// The input is rejected without showing a message, e.g. an empty field.
    Silent,
    /// The input is rejected with a message for the user.
    Failed(String),
}

impl CheckStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

type CheckFn<D> = Box<dyn Fn(&str, Option<&D>) -> CheckStatus>;

/// A single check attached to an input.
pub struct InputCheck<I, D = ()> {
    input: I,
    run_check: CheckFn<D>,
    data: Option<D>,
    status: CheckStatus,
    enabled: bool,
}

impl<I, D> InputCheck<I, D> {
    /// The input this check looks at.
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// The result of the last run while the check was enabled.
    pub fn status(&self) -> &CheckStatus {
        &self.status
    }

    /// Disabled checks are not run and never count as failed.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl<I: std::fmt::Debug, D: std::fmt::Debug> std::fmt::Debug for InputCheck<I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputCheck")
            .field("input", &self.input)
            .field("data", &self.data)
            .field("status", &self.status)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// What a screen provides to run its checks.
pub trait InputCheckHandler<I, D = ()> {
    /// Returns the current text of an input.
    fn get_input(&self, input: &I) -> String;

    /// Shows the status of a check that was just run.
    fn set_status(&mut self, check: &InputCheck<I, D>);
}

/// Identifies a check within its [`InputCheckSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckId(usize);

/// The ordered input checks of a screen.
pub struct InputCheckSet<I, D = ()> {
    checks: Vec<InputCheck<I, D>>,
}

impl<I, D> InputCheckSet<I, D> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Adds a check. It starts enabled with an `Ok` status.
    pub fn add_check<F>(&mut self, input: I, run_check: F, data: Option<D>) -> CheckId
    where
        F: Fn(&str, Option<&D>) -> CheckStatus + 'static,
    {
        self.checks.push(InputCheck {
            input,
            run_check: Box::new(run_check),
            data,
            status: CheckStatus::Ok,
            enabled: true,
        });
        CheckId(self.checks.len() - 1)
    }

    pub fn check(&self, id: CheckId) -> Option<&InputCheck<I, D>> {
        self.checks.get(id.0)
    }

    pub fn set_enabled(&mut self, id: CheckId, enabled: bool) {
        if let Some(check) = self.checks.get_mut(id.0) {
            check.enabled = enabled;
        }
    }

    /// Runs one check and reports its status to the handler.
    ///
    /// Returns `false` if the check is disabled or unknown.
    pub fn update_check_status<H>(&mut self, id: CheckId, handler: &mut H) -> bool
    where
        H: InputCheckHandler<I, D>,
    {
        let Some(check) = self.checks.get_mut(id.0) else {
            return false;
        };
        if !check.enabled {
            return false;
        }

        let value = handler.get_input(&check.input);
        check.status = (check.run_check)(&value, check.data.as_ref());
        handler.set_status(check);
        true
    }

    /// Runs every enabled check in order.
    pub fn update_all<H>(&mut self, handler: &mut H)
    where
        H: InputCheckHandler<I, D>,
    {
        for index in 0..self.checks.len() {
            self.update_check_status(CheckId(index), handler);
        }
    }

    /// Enabled checks whose status is not `Ok`.
    pub fn failed_checks(&self) -> impl Iterator<Item = &InputCheck<I, D>> {
        self.checks
            .iter()
            .filter(|c| c.enabled && !c.status.is_ok())
    }

    /// Enabled checks that failed with a message.
    pub fn failed_checks_with_message(&self) -> impl Iterator<Item = &InputCheck<I, D>> {
        self.checks
            .iter()
            .filter(|c| c.enabled && matches!(c.status, CheckStatus::Failed(_)))
    }

    pub fn checks(&self) -> impl Iterator<Item = &InputCheck<I, D>> {
        self.checks.iter()
    }
}

impl<I, D> Default for InputCheckSet<I, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts an empty field or a valid proxy URL.
pub fn check_proxy<D>(value: &str, _data: Option<&D>) -> CheckStatus {
    if value.trim().is_empty() {
        return CheckStatus::Ok;
    }
    match ProxyString::parse(value.trim()) {
        Ok(_) => CheckStatus::Ok,
        Err(_) => CheckStatus::Failed("Invalid proxy URL.".to_string()),
    }
}

/// Accepts a repository URL with a network or `file` protocol.
///
/// An empty field fails silently.
pub fn check_repo_url<D>(value: &str, _data: Option<&D>) -> CheckStatus {
    let value = value.trim();
    if value.is_empty() {
        return CheckStatus::Silent;
    }

    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "file" || parsed.scheme() == "nfs" => CheckStatus::Ok,
        Ok(parsed) if has_network_protocol(value) => {
            if parsed.host_str().map_or(true, str::is_empty) {
                CheckStatus::Failed("The URL has no host.".to_string())
            } else {
                CheckStatus::Ok
            }
        }
        Ok(parsed) => CheckStatus::Failed(format!("Unsupported protocol '{}'.", parsed.scheme())),
        Err(e) => CheckStatus::Failed(format!("Invalid URL: {}.", e)),
    }
}
