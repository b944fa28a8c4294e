//! Parameter resolution for the dsmadmc runner.
//!
//! The host engine hands over a flat map of named parameters in which
//! several fields have a long form and a short alias (`serveraddress`/`se`,
//! `password`/`pa`, `commadelimited`/`comma`, `tabdelimited`/`tab`,
//! `displaymode`/`displ`). Resolution merges each pair into one canonical
//! field, enforcing that at most one member of a pair is supplied, and
//! rejects requests missing any required field. No side effects; the
//! resolver is a pure validation/merge function.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ModuleError, Result};
use crate::types::{CommandInput, DisplayMode};

/// Raw parameters as received from the host engine.
///
/// Every field is optional at this layer; required-field enforcement
/// happens in [`resolve`]. Unknown keys in the incoming map are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParams {
    pub command: Option<CommandInput>,
    pub serveraddress: Option<String>,
    pub se: Option<String>,
    pub id: Option<String>,
    pub password: Option<String>,
    pub pa: Option<String>,
    pub dataonly: Option<bool>,
    pub commadelimited: Option<bool>,
    pub comma: Option<bool>,
    pub tabdelimited: Option<bool>,
    pub tab: Option<bool>,
    pub displaymode: Option<String>,
    pub displ: Option<String>,
    pub dsmdir: Option<PathBuf>,
    pub sim_mode: Option<bool>,
    pub sim_out: Option<String>,
    pub sim_rc: Option<i64>,
}

/// The validated, canonical parameter set for one invocation.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Administrative command text, final token of the compiled string.
    pub command: String,
    /// Server stanza the client connects to (`-SE=`).
    pub server_address: String,
    /// Administrator user id (`-ID=`).
    pub user_id: String,
    /// Administrator password (`-PA=`). Never logged in plaintext.
    pub password: String,
    /// Suppress version banner and output headers (`-DATAONLY=YES`).
    pub data_only: bool,
    /// Comma-separated tabular output (`-COMMA`).
    pub comma_delimited: bool,
    /// Tab-separated tabular output (`-TAB`).
    pub tab_delimited: bool,
    /// Forced query output layout (`-DISPL=`).
    pub display_mode: Option<DisplayMode>,
    /// Directory the client binary resides in.
    pub binary_dir: Option<PathBuf>,
    /// Fabricate the outcome instead of spawning the client.
    pub simulate: bool,
    /// Fabricated stdout for simulated runs.
    pub simulated_output: Option<String>,
    /// Fabricated exit code for simulated runs.
    pub simulated_rc: Option<i64>,
}

/// Merge an alias pair: at most one member may be supplied.
///
/// Every aliased field in the parameter map goes through this helper so
/// the conflict contract stays in one place.
fn resolve_one_of<T>(
    full: Option<T>,
    alias: Option<T>,
    conflict: ModuleError,
) -> Result<Option<T>> {
    match (full, alias) {
        (Some(_), Some(_)) => Err(conflict),
        (Some(value), None) | (None, Some(value)) => Ok(Some(value)),
        (None, None) => Ok(None),
    }
}

/// Blank strings count as not supplied.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Validate and merge raw parameters into an [`InvocationRequest`].
///
/// Fails fast with the first violated rule, in required-field order:
/// command, server address, user id, password, then the optional alias
/// pairs. No process is ever spawned for an invalid request.
pub fn resolve(params: RawParams) -> Result<InvocationRequest> {
    let command = non_blank(params.command.map(CommandInput::into_text))
        .ok_or(ModuleError::MissingCommand)?;

    let server_address = resolve_one_of(
        non_blank(params.serveraddress),
        non_blank(params.se),
        ModuleError::ConflictingServer,
    )?
    .ok_or(ModuleError::MissingServer)?;

    let user_id = non_blank(params.id).ok_or(ModuleError::MissingUserId)?;

    let password = resolve_one_of(
        non_blank(params.password),
        non_blank(params.pa),
        ModuleError::ConflictingPassword,
    )?
    .ok_or(ModuleError::MissingPassword)?;

    let comma_delimited = resolve_one_of(
        params.commadelimited,
        params.comma,
        ModuleError::conflicting_option("commadelimited", "comma"),
    )?
    .unwrap_or(false);

    let tab_delimited = resolve_one_of(
        params.tabdelimited,
        params.tab,
        ModuleError::conflicting_option("tabdelimited", "tab"),
    )?
    .unwrap_or(false);

    let display_mode = resolve_one_of(
        non_blank(params.displaymode),
        non_blank(params.displ),
        ModuleError::conflicting_option("displaymode", "displ"),
    )?
    .map(|raw| {
        raw.parse::<DisplayMode>()
            .map_err(|_| ModuleError::InvalidDisplayMode(raw))
    })
    .transpose()?;

    Ok(InvocationRequest {
        command,
        server_address,
        user_id,
        password,
        data_only: params.dataonly.unwrap_or(false),
        comma_delimited,
        tab_delimited,
        display_mode,
        binary_dir: params.dsmdir,
        simulate: params.sim_mode.unwrap_or(false),
        simulated_output: params.sim_out,
        simulated_rc: params.sim_rc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> RawParams {
        RawParams {
            command: Some(CommandInput::Text("SELECT 1".to_string())),
            se: Some("s1".to_string()),
            id: Some("u1".to_string()),
            pa: Some("p1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_request_resolves() {
        let request = resolve(minimal()).expect("should resolve");
        assert_eq!(request.command, "SELECT 1");
        assert_eq!(request.server_address, "s1");
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.password, "p1");
        assert!(!request.data_only);
        assert!(!request.comma_delimited);
        assert!(!request.tab_delimited);
        assert!(request.display_mode.is_none());
        assert!(!request.simulate);
    }

    #[test]
    fn test_missing_command() {
        let mut params = minimal();
        params.command = None;
        assert!(matches!(resolve(params), Err(ModuleError::MissingCommand)));
    }

    #[test]
    fn test_blank_command_counts_as_missing() {
        let mut params = minimal();
        params.command = Some(CommandInput::Text("   ".to_string()));
        assert!(matches!(resolve(params), Err(ModuleError::MissingCommand)));
    }

    #[test]
    fn test_missing_server() {
        let mut params = minimal();
        params.se = None;
        assert!(matches!(resolve(params), Err(ModuleError::MissingServer)));
    }

    #[test]
    fn test_conflicting_server() {
        let mut params = minimal();
        params.serveraddress = Some("other".to_string());
        assert!(matches!(resolve(params), Err(ModuleError::ConflictingServer)));
    }

    #[test]
    fn test_long_form_server_accepted() {
        let mut params = minimal();
        params.se = None;
        params.serveraddress = Some("tsm1".to_string());
        let request = resolve(params).unwrap();
        assert_eq!(request.server_address, "tsm1");
    }

    #[test]
    fn test_missing_user_id() {
        let mut params = minimal();
        params.id = Some(String::new());
        assert!(matches!(resolve(params), Err(ModuleError::MissingUserId)));
    }

    #[test]
    fn test_missing_and_conflicting_password() {
        let mut params = minimal();
        params.pa = None;
        assert!(matches!(resolve(params), Err(ModuleError::MissingPassword)));

        let mut params = minimal();
        params.password = Some("p2".to_string());
        assert!(matches!(resolve(params), Err(ModuleError::ConflictingPassword)));
    }

    #[test]
    fn test_conflicting_option_pairs() {
        let mut params = minimal();
        params.commadelimited = Some(true);
        params.comma = Some(false);
        assert!(matches!(
            resolve(params),
            Err(ModuleError::ConflictingOption { full: "commadelimited", .. })
        ));

        let mut params = minimal();
        params.tabdelimited = Some(false);
        params.tab = Some(true);
        assert!(matches!(
            resolve(params),
            Err(ModuleError::ConflictingOption { full: "tabdelimited", .. })
        ));

        let mut params = minimal();
        params.displaymode = Some("LISt".to_string());
        params.displ = Some("TABle".to_string());
        assert!(matches!(
            resolve(params),
            Err(ModuleError::ConflictingOption { full: "displaymode", .. })
        ));
    }

    #[test]
    fn test_alias_forms_of_options_win_when_alone() {
        let mut params = minimal();
        params.comma = Some(true);
        params.tab = Some(true);
        params.displ = Some("table".to_string());
        let request = resolve(params).unwrap();
        assert!(request.comma_delimited);
        assert!(request.tab_delimited);
        assert_eq!(request.display_mode, Some(DisplayMode::Table));
    }

    #[test]
    fn test_invalid_display_mode_rejected() {
        let mut params = minimal();
        params.displaymode = Some("WIDE".to_string());
        assert!(matches!(
            resolve(params),
            Err(ModuleError::InvalidDisplayMode(v)) if v == "WIDE"
        ));
    }

    #[test]
    fn test_token_sequence_command() {
        let mut params = minimal();
        params.command = Some(
            serde_json::from_str(r#"["QUERY", "SESSION", 5]"#).expect("valid command tokens"),
        );
        let request = resolve(params).unwrap();
        assert_eq!(request.command, "QUERY SESSION 5");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let params: RawParams = serde_json::from_str(
            r#"{"command": "q st", "se": "s1", "id": "u1", "pa": "p1", "_host_verbosity": 3}"#,
        )
        .expect("unknown keys must not fail deserialization");
        assert!(resolve(params).is_ok());
    }
}
