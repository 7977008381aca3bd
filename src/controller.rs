use crate::client::SearchClient;
use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::SubmitError;
use crate::form::SearchForm;
use crate::view::ResultView;

/// A submit event raised against the bound form. The controller suppresses
/// the default navigation unconditionally before doing anything else.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> SubmitEvent {
        SubmitEvent::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Wires one form to one network call and reflects the outcome into the
/// view. Bound once at host startup; no teardown, no in-flight tracking.
/// Exactly two terminal outcomes per submission: a full success render, or
/// an alert with nothing revealed.
pub struct FormSubmitController<V: ResultView> {
    form: SearchForm,
    client: SearchClient,
    view: V,
}

impl<V: ResultView> FormSubmitController<V> {
    pub fn bind(form: SearchForm, client: SearchClient, view: V) -> FormSubmitController<V> {
        FormSubmitController { form, client, view }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    /// Live access for the host, like typing into the page's inputs.
    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn handle_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();

        match self.submit().await {
            Ok(response) => self.render_success(&response),
            Err(e) => self.view.alert(&e.to_string()),
        }
    }

    /// One round trip: snapshot the form, post it, branch on the success
    /// flag. A well-formed `success:false` reply becomes an application
    /// error carrying the server's message.
    async fn submit(&self) -> Result<SearchResponse, SubmitError> {
        let request = SearchRequest::from_form(&self.form);
        log::info!(
            "search submitted for zipcode: {}",
            request.value("zipcode").unwrap_or("")
        );

        let response = self.client.search(&request).await?;
        if response.success {
            Ok(response)
        } else {
            Err(SubmitError::Application(
                response.message.unwrap_or_default(),
            ))
        }
    }

    // The echoed zipcode and date are read back from the live inputs, not
    // from the request snapshot and not from the response. Contract of the
    // page this models; keep it even if the server starts echoing them.
    fn render_success(&mut self, response: &SearchResponse) {
        let zipcode = self.form.value("zipcode").unwrap_or_default().to_string();
        let date = self.form.value("date").unwrap_or_default().to_string();
        let cases = response
            .cases
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_default();
        let graph_url = response.graph_url.clone().unwrap_or_default();

        self.view.set_result_zipcode(&zipcode);
        self.view.set_result_date(&date);
        self.view.set_result_cases(&cases);
        self.view.show_result_panel();
        self.view.set_graph_source(&graph_url);
        self.view.show_graph();
        self.view.set_table_date(&date);
        self.view.set_table_cases(&cases);
        self.view.show_result_table();
    }
}
