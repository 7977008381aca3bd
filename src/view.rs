/// The result widgets the controller writes into, bound at construction so
/// the controller never touches a live document directly. The page hides
/// the panel, graph and table by default; the show_* calls reveal them.
pub trait ResultView {
    fn set_result_zipcode(&mut self, value: &str);
    fn set_result_date(&mut self, value: &str);
    fn set_result_cases(&mut self, value: &str);
    fn set_graph_source(&mut self, url: &str);
    fn set_table_date(&mut self, value: &str);
    fn set_table_cases(&mut self, value: &str);

    fn show_result_panel(&mut self);
    fn show_graph(&mut self);
    fn show_result_table(&mut self);

    /// Blocking alert dialog. The only surface errors ever reach.
    fn alert(&mut self, message: &str);
}

/// View backing for the CLI host: widgets become labelled stdout lines,
/// alerts go to stderr.
#[derive(Debug, Default)]
pub struct TerminalView;

impl ResultView for TerminalView {
    fn set_result_zipcode(&mut self, value: &str) {
        println!("zipcode: {value}");
    }

    fn set_result_date(&mut self, value: &str) {
        println!("date: {value}");
    }

    fn set_result_cases(&mut self, value: &str) {
        println!("cases: {value}");
    }

    fn set_graph_source(&mut self, url: &str) {
        println!("graph: {url}");
    }

    fn set_table_date(&mut self, value: &str) {
        println!("table | date: {value}");
    }

    fn set_table_cases(&mut self, value: &str) {
        println!("table | cases: {value}");
    }

    fn show_result_panel(&mut self) {}

    fn show_graph(&mut self) {}

    fn show_result_table(&mut self) {}

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
