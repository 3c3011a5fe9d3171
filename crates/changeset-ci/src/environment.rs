use std::io::IsTerminal;

const NO_TTY_VAR: &str = "CHANGESET_CI_NO_TTY";
const FORCE_TTY_VAR: &str = "CHANGESET_CI_FORCE_TTY";

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "BUILDKITE",
    "JENKINS_URL",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: &'static str },
    NoTerminal,
}

/// `None` when prompting on the terminal is possible.
pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    reason_from(|name| std::env::var_os(name).is_some(), || {
        std::io::stdin().is_terminal()
    })
}

fn reason_from(
    is_set: impl Fn(&str) -> bool,
    stdin_is_terminal: impl FnOnce() -> bool,
) -> Option<NonInteractiveReason> {
    if is_set(NO_TTY_VAR) {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if is_set(FORCE_TTY_VAR) {
        return None;
    }

    if let Some(env_var) = CI_ENV_VARS.iter().copied().find(|name| is_set(name)) {
        return Some(NonInteractiveReason::CiDetected { env_var });
    }

    if !stdin_is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}
