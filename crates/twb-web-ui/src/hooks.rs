//! Fetch-on-mount hooks
//!
//! A hook issues exactly one request when the owning component is set up.
//! Component setup runs once per mount in Leptos, so the request is started
//! from the hook body rather than from an effect; reading the returned
//! [`Fetch`] in views never re-issues it.
//!
//! The request is aborted when the owner is cleaned up, so a response that
//! arrives after unmount is dropped instead of written into disposed state.

use futures::future::{abortable, AbortHandle, Aborted, LocalBoxFuture};
use futures::FutureExt;
use leptos::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, RequestDescriptor};
use crate::error::Result;
use crate::state::{BodyContent, FetchState};

/// Reactive view of one hook instance's [`FetchState`]
#[derive(Debug, Clone, Copy)]
pub struct Fetch {
    state: ReadSignal<FetchState>,
}

impl Fetch {
    pub fn state(&self) -> ReadSignal<FetchState> {
        self.state
    }

    pub fn settled(&self) -> bool {
        self.state.with(FetchState::is_settled)
    }

    pub fn payload(&self) -> Option<Value> {
        self.state.with(|s| s.payload().cloned())
    }

    pub fn error_message(&self) -> String {
        self.state.with(FetchState::error_message)
    }

    pub fn body(&self) -> BodyContent {
        self.state.with(FetchState::body)
    }
}

/// Fetch `request` once for the lifetime of the current component.
pub fn use_fetch(request: RequestDescriptor) -> Fetch {
    let client = expect_context::<ApiClient>();
    let state = create_rw_signal(FetchState::Idle);

    state.update(|s| {
        s.begin();
    });

    let (task, abort) = fetch_once(client, request, move |result| {
        state.update(|s| {
            s.settle(result);
        });
    });
    on_cleanup(move || abort.abort());
    spawn_local(task);

    Fetch {
        state: state.read_only(),
    }
}

/// Read variant: `GET {base}/{path}`.
pub fn use_get(path: &str) -> Fetch {
    use_fetch(RequestDescriptor::get(path))
}

/// Write variant: `POST {base}/{path}` with a JSON body.
pub fn use_post(path: &str, body: Value) -> Fetch {
    use_fetch(RequestDescriptor::post(path, body))
}

/// Build the single request task for a hook.
///
/// `on_settled` runs exactly once if the request completes, and never if the
/// returned handle aborts it first.
pub fn fetch_once<F>(
    client: ApiClient,
    request: RequestDescriptor,
    on_settled: F,
) -> (LocalBoxFuture<'static, ()>, AbortHandle)
where
    F: FnOnce(Result<Value>) + 'static,
{
    let method = request.method();
    let path = request.relative_path().to_string();
    debug!(%method, path = %path, base = client.base_url(), "Starting request");

    let (call, handle) = abortable(async move { client.send(&request).await });

    let task = async move {
        match call.await {
            Ok(Ok(payload)) => {
                info!(%method, path = %path, "Request completed");
                on_settled(Ok(payload));
            }
            Ok(Err(err)) => {
                warn!(%method, path = %path, error = %err, "Request failed");
                on_settled(Err(err));
            }
            Err(Aborted) => {
                debug!(%method, path = %path, "Request cancelled before completion");
            }
        }
    };

    (task.boxed_local(), handle)
}
