//! Configuration comes from `--name=value` arguments passed to the app.

#[cfg(test)]
use std::cell::RefCell;
use std::str::FromStr;

/// Retrieve the value of the first arg named after one of `arg_names`.
/// An arg given without value (`--name=`) counts as an empty string.
///
/// Args are read from the process, except in tests where they come from `with_env_args`.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: IntoIterator<Item = &'a str>,
{
    let arg_names = arg_names.into_iter().collect::<Vec<_>>();
    get_env_args().into_iter().find_map(|arg| {
        let (name, value) = arg.split_once('=')?;
        arg_names
            .iter()
            .any(|arg_name| *arg_name == name)
            .then(|| value.to_owned())
    })
}

/// Retrieve an arg value the app can't run without.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value([arg_name]).ok_or(error_if_missing)
}

/// Retrieve and parse an arg value. Unparsable values are treated as missing.
pub fn retrieve_parsed_arg_value<T: FromStr>(arg_name: &str) -> Option<T> {
    retrieve_arg_value([arg_name]).and_then(|value| {
        let parsed = value.trim().parse::<T>().ok();
        if parsed.is_none() {
            warn!("Ignoring invalid value for {arg_name} [value: {value}]");
        }
        parsed
    })
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    std::env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while a test runs under `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

/// Run `function` as if the app had been started with `args`.
/// Previous args are restored afterward.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let previous_args = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(previous_args));
    result
}
