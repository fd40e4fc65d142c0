use crate::ast::ResolvedCall;
use crate::registry::WatchedLogs;

/// Decides whether `call` is a watched log call and returns the index of its
/// message argument.
///
/// Returns `None` for unresolved callees, builtins, unwatched packages and
/// names, and for calls with too few arguments to hold the message.
pub fn message_index(call: &ResolvedCall, watched: &WatchedLogs) -> Option<usize> {
    let callee = call.callee.as_ref()?;
    let package = callee.package_path.as_deref()?;
    let entry = watched.get(package)?;

    let index = match &callee.receiver {
        None => entry.function_index(&callee.name)?,
        Some(receiver) => entry.method_index(receiver.type_name()?, &callee.name)?,
    };

    if call.args.len() <= index {
        tracing::trace!(
            target: "logcheck",
            package,
            callee = %callee.name,
            index,
            args = call.args.len(),
            "watched call has no message argument"
        );
        return None;
    }

    tracing::trace!(target: "logcheck", package, callee = %callee.name, index, "watched call");
    Some(index)
}
