//! `RecordClient` — the concurrent batched RPC engine.
//!
//! A batched call runs as: resolve the operation header, split the request
//! list into chunks, fan the chunks out as independent tasks (encode →
//! transport call → decode), then reassemble the completed chunks into one
//! ordered result list validated against the request count. The client is
//! stateless between calls apart from its worker-pool handle; any number of
//! calls may be in flight concurrently on one instance.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use recordkit_core::batch::{self, Chunk, DEFAULT_CHUNK_LIMIT};
use recordkit_core::error::ClientError;
use recordkit_core::frame;
use recordkit_core::header::HeaderResolver;
use recordkit_core::message::{RequestHeader, RequestOperation, ResponseOperation};
use recordkit_core::transport::RecordTransport;

/// Configuration for [`RecordClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum requests per chunk. A request list at or under this limit
    /// is sent as a single chunk with no batching overhead.
    pub chunk_limit: usize,
    /// Maximum chunks in flight at once, across all concurrent calls on
    /// this client instance.
    pub max_concurrent_chunks: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            max_concurrent_chunks: 4,
        }
    }
}

/// Concurrent batched record-storage client.
///
/// Requests over the chunk limit are processed concurrently; the response
/// list always matches the request list in length and order.
pub struct RecordClient {
    transport: Arc<dyn RecordTransport>,
    headers: HeaderResolver,
    workers: Arc<Semaphore>,
    chunk_limit: usize,
    user_id: String,
}

impl RecordClient {
    /// Create a client over `transport` with the given header resolver and
    /// resolved session user id.
    pub fn new(
        transport: Arc<dyn RecordTransport>,
        headers: HeaderResolver,
        user_id: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        assert!(config.chunk_limit > 0, "chunk limit must be positive");
        assert!(
            config.max_concurrent_chunks > 0,
            "max concurrent chunks must be positive"
        );
        Self {
            transport,
            headers,
            workers: Arc::new(Semaphore::new(config.max_concurrent_chunks)),
            chunk_limit: config.chunk_limit,
            user_id: user_id.into(),
        }
    }

    /// The resolved record-storage user id for this session. Operation
    /// builders embed it in the requests they construct.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Execute a batched call: one response per request, in request order,
    /// projected through `project`.
    ///
    /// Fails without issuing any network call if `key` is not a supported
    /// operation key. Any failure aborts the entire call; there is no
    /// partial-success mode.
    pub async fn get<T>(
        &self,
        key: &str,
        requests: Vec<RequestOperation>,
        project: impl FnMut(ResponseOperation) -> T,
    ) -> Result<Vec<T>, ClientError> {
        let header = self.headers.resolve(key)?;
        self.execute(header, requests, project).await
    }

    async fn execute<T>(
        &self,
        header: RequestHeader,
        requests: Vec<RequestOperation>,
        project: impl FnMut(ResponseOperation) -> T,
    ) -> Result<Vec<T>, ClientError> {
        assert!(!requests.is_empty(), "batched call with no requests");

        let expected = requests.len();
        debug!(
            requests = expected,
            operation = %header.operation,
            "executing batched call"
        );

        let chunks = batch::split(requests, self.chunk_limit);
        debug!(chunks = chunks.len(), "dispatching chunks");

        let mut tasks: JoinSet<Result<Chunk<ResponseOperation>, ClientError>> = JoinSet::new();
        for chunk in chunks {
            let transport = Arc::clone(&self.transport);
            let workers = Arc::clone(&self.workers);
            let header = header.clone();
            tasks.spawn(async move {
                let _permit = workers
                    .acquire_owned()
                    .await
                    .map_err(|_| ClientError::Interrupted("worker pool closed".into()))?;
                let index = chunk.index;
                let body = frame::encode(&header, &chunk.items)?;
                let responses = transport.execute(body).await?;
                Ok(Chunk { index, items: responses })
            });
        }

        let mut completed = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(chunk)) => completed.push(chunk),
                Ok(Err(e)) => {
                    // First observed failure wins. Siblings keep running
                    // detached; their results are discarded.
                    tasks.detach_all();
                    return Err(e);
                }
                Err(join_err) if join_err.is_panic() => {
                    // A fault inside chunk work resurfaces as itself, not
                    // as a wrapper.
                    tasks.detach_all();
                    std::panic::resume_unwind(join_err.into_panic());
                }
                Err(join_err) => {
                    tasks.detach_all();
                    return Err(ClientError::Interrupted(join_err.to_string()));
                }
            }
        }

        batch::assemble(completed, expected, project)
    }
}
