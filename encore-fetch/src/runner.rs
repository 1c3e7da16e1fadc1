//! The fetch boundary.
//!
//! [`run_with_token`] obtains a token, runs one remote operation with it and
//! turns classified failures into data. Only credential failures and
//! unclassifiable errors come back as `Err`. A token the server rejects is
//! dropped from the provider so the next call fetches a new one.

use encore_core::{BearerToken, ErrorKind, FetchedResource, LoadResult, Page};
use std::future::Future;
use tracing::debug;

use crate::classify::classify;
use crate::credential::CredentialProvider;
use crate::error::{FetchError, RemoteError};

/// Runs `operation` with a valid bearer token.
///
/// # Errors
///
/// Returns [`FetchError::Credential`] if no token could be obtained, in which
/// case `operation` is never called, and [`FetchError::Unclassified`] if the
/// operation failed in a way [`classify`] does not recognise.
pub async fn run_with_token<P, F, Fut, T>(
    provider: &P,
    operation: F,
) -> Result<FetchedResource<T>, FetchError>
where
    P: CredentialProvider + ?Sized,
    F: FnOnce(BearerToken) -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let token = provider.valid_bearer_token().await?;

    match operation(token).await {
        Ok(data) => Ok(FetchedResource::success(data)),
        Err(error) => match classify(&error) {
            Some(kind) => {
                debug!(kind = %kind, error = %error, "Remote call failed");
                if kind == ErrorKind::BadOrExpiredToken {
                    provider.invalidate().await;
                }
                Ok(FetchedResource::failure(kind))
            }
            None => Err(FetchError::Unclassified(error)),
        },
    }
}

/// Page-granular counterpart of [`run_with_token`].
///
/// # Errors
///
/// Same as [`run_with_token`].
pub async fn load_page_with_token<P, F, Fut, T>(
    provider: &P,
    operation: F,
) -> Result<LoadResult<T>, FetchError>
where
    P: CredentialProvider + ?Sized,
    F: FnOnce(BearerToken) -> Fut,
    Fut: Future<Output = Result<Page<T>, RemoteError>>,
{
    Ok(match run_with_token(provider, operation).await? {
        FetchedResource::Success { data } => LoadResult::Page(data),
        FetchedResource::Failure { cause } => LoadResult::Error(cause),
    })
}
