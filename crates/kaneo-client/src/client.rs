//! The remote data source: typed fetches and intent execution.

use std::time::Duration;

use kaneo_core::intent::{self, Method, MutationIntent};
use kaneo_core::notification::Notification;
use kaneo_core::project::Project;
use kaneo_core::snapshot::Snapshot;
use kaneo_core::task::{Board, NewTask, Task};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpResponse, Transport, UreqTransport};

/// Client for the project-management API.
///
/// Every call is a single blocking request. Nothing is cached and nothing
/// is retried.
pub struct KaneoClient<T: Transport = UreqTransport> {
    transport: T,
    base_url: String,
    token: String,
}

impl KaneoClient<UreqTransport> {
    /// Connects through a real ureq agent.
    pub fn connect(base_url: &str, token: &str, timeout: Duration) -> Self {
        Self::with_transport(UreqTransport::new(timeout), base_url, token)
    }
}

impl<T: Transport> KaneoClient<T> {
    pub fn with_transport(transport: T, base_url: &str, token: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and turns non-2xx responses into errors.
    fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<HttpResponse> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            bearer: self.token.clone(),
            body,
        };

        debug!(%method, path, "sending request");
        let response = self.transport.send(&request)?;
        debug!(%method, path, status = response.status, "received response");

        if response.is_success() {
            Ok(response)
        } else {
            let err = ClientError::from_status(
                response.status,
                &response.status_text,
                response.server_message(),
            );
            warn!(%method, path, error = %err, "request rejected");
            Err(err)
        }
    }

    fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.request(Method::Get, path, None)?;
        decode(path, &response)
    }

    // -- Fetches ------------------------------------------------------------

    pub fn list_projects(&self, workspace_id: &str) -> Result<Vec<Project>> {
        let path = format!("/project?workspaceId={}", urlencoding::encode(workspace_id));
        self.get_json(&path)
    }

    /// Columns and tasks of one project.
    pub fn get_board(&self, project_id: &str) -> Result<Board> {
        self.get_json(&format!("/task/tasks/{project_id}"))
    }

    pub fn get_task(&self, task_id: &str) -> Result<Task> {
        self.get_json(&format!("/task/{task_id}"))
    }

    pub fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.get_json("/notification")
    }

    // -- Mutations ----------------------------------------------------------

    /// Executes a mutation intent. Any 2xx response is success.
    pub fn execute(&self, intent: &MutationIntent) -> Result<()> {
        self.request(intent.method, &intent.path, intent.body.clone())?;
        Ok(())
    }

    /// Creates a task and returns the server's copy of it.
    pub fn create_task(&self, project_id: &str, task: &NewTask) -> Result<Task> {
        let intent = intent::create_task(project_id, task);
        let response = self.request(intent.method, &intent.path, intent.body)?;
        decode(&format!("/task/{project_id}"), &response)
    }

    /// Fire-and-refetch: executes `intent`, then replaces `snapshot` with
    /// the result of `refresh`.
    ///
    /// If the mutation fails, `refresh` is not called and `snapshot` keeps
    /// its last-known-good value. If the refetch fails, the mutation has
    /// still been applied server-side and the refetch error is returned.
    pub fn mutate_and_refetch<'s, V, F>(
        &self,
        intent: &MutationIntent,
        snapshot: &'s mut Snapshot<V>,
        refresh: F,
    ) -> Result<&'s V>
    where
        F: FnOnce(&Self) -> Result<V>,
    {
        self.execute(intent)?;
        debug!(%intent, generation = snapshot.generation(), "refetching after mutation");
        snapshot.refresh_with(|| refresh(self))
    }
}

fn decode<R: DeserializeOwned>(path: &str, response: &HttpResponse) -> Result<R> {
    serde_json::from_str(&response.body).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaneo_core::enums::Status;
    use kaneo_core::task::TaskBuilder;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse>>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn reply(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                status_text: match status {
                    200 => "OK",
                    401 => "Unauthorized",
                    404 => "Not Found",
                    _ => "",
                }
                .to_string(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(self, message: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ClientError::Transport(message.to_string())));
            self
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
            self.sent.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".into())))
        }
    }

    fn client(transport: ScriptedTransport) -> KaneoClient<ScriptedTransport> {
        KaneoClient::with_transport(transport, "https://kaneo.test/api/", "tok")
    }

    const BOARD_V1: &str = r#"{"id":"p1","name":"Web","columns":[
        {"id":"to-do","name":"To Do","tasks":[{"id":"42","status":"to-do"}]},
        {"id":"done","name":"Done","tasks":[]}]}"#;
    const BOARD_V2: &str = r#"{"id":"p1","name":"Web","columns":[
        {"id":"to-do","name":"To Do","tasks":[]},
        {"id":"done","name":"Done","tasks":[{"id":"42","status":"done"}]}]}"#;

    #[test]
    fn fetch_sends_bearer_and_builds_url() {
        let c = client(ScriptedTransport::default().reply(200, "[]"));
        let projects = c.list_projects("ws 1").unwrap();
        assert!(projects.is_empty());

        let sent = c.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "https://kaneo.test/api/project?workspaceId=ws%201");
        assert_eq!(sent[0].bearer, "tok");
        assert!(sent[0].body.is_none());
    }

    #[test]
    fn execute_sends_intent_verbatim() {
        let c = client(ScriptedTransport::default().reply(200, "{}"));
        let task = TaskBuilder::new("42").build();
        c.execute(&intent::change_status(&task, &Status::Done)).unwrap();

        let sent = c.transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "https://kaneo.test/api/task/status/42");
        assert_eq!(sent[0].body, Some(serde_json::json!({"status": "done"})));
    }

    #[test]
    fn unauthorized_response_is_classified() {
        let c = client(ScriptedTransport::default().reply(401, ""));
        let err = c.list_notifications().unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn error_carries_server_message() {
        let c = client(ScriptedTransport::default().reply(404, r#"{"message":"Task not found"}"#));
        let err = c.get_task("nope").unwrap_err();
        assert_eq!(err.to_string(), "server returned 404: Task not found");
    }

    #[test]
    fn bad_body_is_decode_error() {
        let c = client(ScriptedTransport::default().reply(200, "not json"));
        let err = c.get_board("p1").unwrap_err();
        assert!(matches!(err, ClientError::Decode { ref path, .. } if path == "/task/tasks/p1"));
    }

    #[test]
    fn mutate_and_refetch_replaces_snapshot() {
        let c = client(
            ScriptedTransport::default()
                .reply(200, BOARD_V1)
                .reply(200, "")
                .reply(200, BOARD_V2),
        );
        let mut snapshot = Snapshot::new(c.get_board("p1").unwrap());
        let task = snapshot.get().unwrap().find_task("42").unwrap().clone();

        let board = c
            .mutate_and_refetch(
                &intent::change_status(&task, &Status::Done),
                &mut snapshot,
                |c| c.get_board("p1"),
            )
            .unwrap();
        assert_eq!(board.find_task("42").unwrap().status, Some(Status::Done));
        assert_eq!(snapshot.generation(), 2);
        assert_eq!(c.transport.sent.borrow().len(), 3);
    }

    #[test]
    fn failed_mutation_skips_refetch_and_keeps_snapshot() {
        let c = client(ScriptedTransport::default().reply(200, BOARD_V1).reply(500, ""));
        let mut snapshot = Snapshot::new(c.get_board("p1").unwrap());
        let before = snapshot.clone();
        let task = TaskBuilder::new("42").build();

        let mut refreshed = false;
        let result = c.mutate_and_refetch(&intent::delete_task(&task), &mut snapshot, |c| {
            refreshed = true;
            c.get_board("p1")
        });

        assert!(result.is_err());
        assert!(!refreshed);
        assert_eq!(snapshot, before);
        assert_eq!(c.transport.sent.borrow().len(), 2);
    }

    #[test]
    fn transport_failure_propagates() {
        let c = client(ScriptedTransport::default().fail("connection refused"));
        let err = c.execute(&intent::mark_all_read()).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.hint().is_some());
    }

    #[test]
    fn create_task_decodes_created_task() {
        let c = client(
            ScriptedTransport::default()
                .reply(200, r#"{"id":"t9","title":"New","status":"backlog","priority":"low"}"#),
        );
        let created = c.create_task("p1", &NewTask::new("New")).unwrap();
        assert_eq!(created.id, "t9");
        assert_eq!(created.status, Some(Status::Backlog));

        let sent = c.transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "https://kaneo.test/api/task/p1");
    }
}
