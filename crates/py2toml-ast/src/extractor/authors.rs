//! Author/email merge post-pass.

use py2toml_manifest::{SetupMetadata, Warning};
use tracing::debug;

/// Zip parallel author and email lists into combined `Name <email>` entries,
/// pairing by index.
///
/// Fires only when `author_email` is present; a missing `author` list or a
/// length mismatch records a warning and leaves `author` as parsed.
pub(crate) fn merge_author_emails(metadata: &mut SetupMetadata, warnings: &mut Vec<Warning>) {
    let Some(emails) = metadata.author_email.as_deref() else {
        return;
    };

    let merged = match metadata.author.as_deref() {
        Some(authors) if authors.len() == emails.len() => authors
            .iter()
            .zip(emails)
            .map(|(author, email)| format!("{author} <{email}>"))
            .collect::<Vec<String>>(),
        _ => {
            warnings.push(Warning::author_email_mismatch());
            return;
        }
    };

    debug!("merged authors: {:?}", merged);
    metadata.author = Some(merged);
}
