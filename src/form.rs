/// The bound search form: named input fields kept in document order, the
/// way the page markup declares them. The host mutates values between
/// submissions; the controller only ever reads.
#[derive(Debug, Clone)]
pub struct SearchForm {
    fields: Vec<FormField>,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl SearchForm {
    pub fn new(fields: Vec<(String, String)>) -> SearchForm {
        SearchForm {
            fields: fields
                .into_iter()
                .map(|(name, value)| FormField { name, value })
                .collect(),
        }
    }

    /// Current value of a named field, read live at call time.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Overwrites an existing field or appends a new one at the end,
    /// like typing into an input the markup already declares.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(FormField {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// All named fields as key/value pairs, in document order. This is the
    /// unit that gets URL-encoded onto the wire.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

#[test]
fn test_snapshot_preserves_declaration_order() {
    let form = SearchForm::new(vec![
        ("zipcode".to_string(), "21901".to_string()),
        ("date".to_string(), "2022-02-01".to_string()),
    ]);
    assert_eq!(
        form.snapshot(),
        vec![
            ("zipcode".to_string(), "21901".to_string()),
            ("date".to_string(), "2022-02-01".to_string()),
        ]
    );
}

#[test]
fn test_set_value_overwrites_in_place() {
    let mut form = SearchForm::new(vec![
        ("zipcode".to_string(), "21901".to_string()),
        ("date".to_string(), "2022-02-01".to_string()),
    ]);
    form.set_value("zipcode", "21903");
    assert_eq!(form.value("zipcode"), Some("21903"));
    // order unchanged after the edit
    let names: Vec<String> = form.snapshot().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["zipcode", "date"]);
}

#[test]
fn test_set_value_appends_unknown_field() {
    let mut form = SearchForm::new(vec![("zipcode".to_string(), "21901".to_string())]);
    form.set_value("date", "2022-02-15");
    assert_eq!(form.value("date"), Some("2022-02-15"));
    assert_eq!(form.snapshot().len(), 2);
}
