//! End-to-end panel scenarios against a scripted HTTP transport

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use streetcrm_participants::io::{HttpClient, HttpResponse, PageEffects};
use streetcrm_participants::{
    ApiRoutes, EventId, PanelError, ParticipantClient, ParticipantId, ParticipantPanel,
    RowAction, RowField,
};

/// Transport that replays canned responses and records every request
#[derive(Default)]
struct ScriptedHttp {
    responses: RefCell<VecDeque<streetcrm_participants::Result<HttpResponse>>>,
    requests: RefCell<Vec<(String, String, Option<String>)>>,
}

impl ScriptedHttp {
    fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    fn next(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
    ) -> streetcrm_participants::Result<HttpResponse> {
        self.requests.borrow_mut().push((
            method.to_string(),
            url.to_string(),
            body.map(str::to_string),
        ));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(PanelError::Http("no scripted response".to_string())))
    }
}

#[async_trait(?Send)]
impl HttpClient for &ScriptedHttp {
    async fn get(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        self.next("GET", url, None)
    }

    async fn post(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        self.next("POST", url, None)
    }

    async fn put_json(
        &self,
        url: &str,
        body: &str,
    ) -> streetcrm_participants::Result<HttpResponse> {
        self.next("PUT", url, Some(body))
    }

    async fn delete(&self, url: &str) -> streetcrm_participants::Result<HttpResponse> {
        self.next("DELETE", url, None)
    }
}

/// Page that counts alerts and reloads
#[derive(Default)]
struct RecordingPage {
    alerts: RefCell<Vec<String>>,
    reloads: RefCell<u32>,
}

impl PageEffects for &RecordingPage {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reload(&self) {
        *self.reloads.borrow_mut() += 1;
    }
}

const EVENT_42: &str = r#"[
    {"id":7,"first_name":"Ana","last_name":"Ruiz","institution":{"name":"Clinic A"},
     "phone_number":"555-1000",
     "address":{"number":"12","direction":"N","name":"Main","type":"St"}},
    {"id":8,"first_name":"Bo","last_name":"Li","institution":null,"phone_number":null}
]"#;

#[tokio::test]
async fn page_load_renders_linked_and_available_sections() {
    let http = ScriptedHttp::default()
        .respond(200, EVENT_42)
        .respond(200, r#"[{"id":9,"first_name":"Cy","last_name":"Moe"}]"#);
    let page = RecordingPage::default();
    let client = ParticipantClient::new(ApiRoutes::new(""), &http, &page);

    let event: EventId = "42".parse().unwrap();
    let mut panel = ParticipantPanel::new(event);
    panel.render_rows(client.fetch_participants_or_empty(event).await);
    panel.set_available(client.fetch_available_or_empty(event).await);

    assert_eq!(panel.rows().len(), 2);
    let ana = panel.rows()[0].view();
    assert_eq!(ana.hidden_id(), "7");
    assert_eq!(ana.cells()[4], "12 N Main St");
    assert_eq!(panel.rows()[1].view().cells()[2], "");
    assert_eq!(panel.available()[0].id, ParticipantId(9));

    let requests = http.requests.borrow();
    assert_eq!(requests[0].1, "/api/events/42/participants");
    assert_eq!(requests[1].1, "/api/events/42/available-participants");
}

#[tokio::test]
async fn edit_then_failed_save_keeps_row_and_alerts_once() {
    let http = ScriptedHttp::default()
        .respond(200, EVENT_42)
        .respond(500, "Internal Server Error");
    let page = RecordingPage::default();
    let client = ParticipantClient::new(ApiRoutes::new(""), &http, &page);

    let mut panel = ParticipantPanel::new(EventId(42));
    panel.render_rows(client.fetch_participants_or_empty(EventId(42)).await);

    panel.make_editable(ParticipantId(7));
    assert!(panel.rows()[0].controls().shows(RowAction::Save));
    panel.edit_field(0, RowField::LastName, "Ruiz-Diaz");

    let result = client
        .save_person(&panel.rows()[0].edited_participant())
        .await;

    assert!(result.is_err());
    assert_eq!(*page.alerts.borrow(), vec!["Internal Server Error".to_string()]);
    assert_eq!(*page.reloads.borrow(), 0);
    assert_eq!(panel.rows()[0].view().cells()[1], "Ruiz");

    let requests = http.requests.borrow();
    let (method, url, body) = &requests[1];
    assert_eq!(method, "PUT");
    assert_eq!(url, "/api/participants/7/");
    let body: serde_json::Value = serde_json::from_str(body.as_deref().unwrap()).unwrap();
    assert_eq!(body["last_name"], "Ruiz-Diaz");
    assert_eq!(body["institution"]["name"], "Clinic A");
}

#[tokio::test]
async fn link_and_unlink_reload_only_on_success() {
    let http = ScriptedHttp::default()
        .respond(201, "")
        .respond(500, "boom")
        .respond(204, "");
    let page = RecordingPage::default();
    let client = ParticipantClient::new(ApiRoutes::new(""), &http, &page);

    client
        .link_person(EventId(42), ParticipantId(9))
        .await
        .unwrap();
    assert_eq!(*page.reloads.borrow(), 1);

    assert!(client
        .link_person(EventId(42), ParticipantId(9))
        .await
        .is_err());
    assert_eq!(*page.reloads.borrow(), 1);

    client
        .unlink_person(EventId(42), ParticipantId(7))
        .await
        .unwrap();
    assert_eq!(*page.reloads.borrow(), 2);
    assert!(page.alerts.borrow().is_empty());

    let methods: Vec<_> = http
        .requests
        .borrow()
        .iter()
        .map(|(method, url, _)| format!("{} {}", method, url))
        .collect();
    assert_eq!(
        methods,
        vec![
            "POST /api/events/42/participants/9/",
            "POST /api/events/42/participants/9/",
            "DELETE /api/events/42/participants/7/",
        ]
    );
}

#[tokio::test]
async fn unreachable_server_leaves_panel_empty() {
    let http = ScriptedHttp::default();
    let page = RecordingPage::default();
    let client = ParticipantClient::new(ApiRoutes::new(""), &http, &page);

    let mut panel = ParticipantPanel::new(EventId(42));
    panel.render_rows(client.fetch_participants_or_empty(EventId(42)).await);
    panel.set_available(client.fetch_available_or_empty(EventId(42)).await);

    assert!(panel.rows().is_empty());
    assert!(panel.available().is_empty());
    assert!(page.alerts.borrow().is_empty());
}
