use std::future::Future;

use mo_core::ports::AuthError;
use mo_core::session::SessionAction;
use tracing::{error, warn};

use super::SessionContext;
use crate::usecases::OperationError;

/// Runs one backend call inside the session's operation boundary.
///
/// `BeginOperation` → `call` → (`on_success` action | `Fail`) → `EndOperation`.
/// If another operation is in flight the call is never polled and
/// [`OperationError::Busy`] is returned.
pub(crate) async fn run_operation<T, Fut, F>(
    session: &SessionContext,
    operation: &'static str,
    call: Fut,
    on_success: F,
) -> Result<T, OperationError>
where
    Fut: Future<Output = Result<T, AuthError>>,
    F: FnOnce(&T) -> Option<SessionAction>,
{
    if session
        .dispatch(SessionAction::BeginOperation)
        .await
        .is_err()
    {
        warn!(operation, "operation rejected: another operation in progress");
        return Err(OperationError::Busy);
    }

    let result = call.await;
    match &result {
        Ok(value) => {
            if let Some(action) = on_success(value) {
                session.apply(action).await;
            }
        }
        Err(err) => {
            error!(operation, error = %err, "operation failed");
            session
                .apply(SessionAction::Fail {
                    message: err.to_string(),
                })
                .await;
        }
    }
    session.apply(SessionAction::EndOperation).await;

    result.map_err(OperationError::from)
}
