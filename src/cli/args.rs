use std::ffi::OsString;

use clap::CommandFactory;

use super::Cli;

/// Rewrite single-dash long flags (`-org acme`, `-pr-comment=5`) into their `--` form.
///
/// Only names of [`Cli`]’s long flags are rewritten, and nothing after a `--` terminator,
/// so values that merely start with a dash pass through untouched.
pub(crate) fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let longs: Vec<&str> = command
        .get_arguments()
        .filter_map(clap::Arg::get_long)
        .collect();

    let mut terminated = false;
    args.into_iter()
        .map(|arg| {
            if terminated {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    terminated = true;
                    arg
                }
                Some(s) if is_single_dash_long(s, &longs) => format!("-{s}").into(),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str, longs: &[&str]) -> bool {
    let Some(flag) = arg.strip_prefix('-') else {
        return false;
    };
    if flag.starts_with('-') {
        return false;
    }
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    longs.contains(&name)
}
