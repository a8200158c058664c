use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

fn render<T: Serialize>(response: &CliResponse<T>, pretty: bool) -> String {
    let rendered = if pretty {
        board_model::to_json_pretty(response)
    } else {
        board_model::to_json(response)
    };
    rendered.unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"api_version":"{}","error":"{}"}}"#,
            env!("CARGO_PKG_VERSION"),
            e.to_string().replace('"', "'")
        )
    })
}

pub fn output_success<T: Serialize>(data: T, pretty: bool) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", render(&response, pretty));
}

pub fn output_list<T: Serialize>(items: Vec<T>, pretty: bool) {
    let count = items.len();
    let list = ListResponse { items, count };
    output_success(list, pretty);
}

/// Outputs an error response to stderr and terminates the process.
///
/// Exits with code 1 so shell scripts and CI pipelines see the failure.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", render(&response, false));
    std::process::exit(1);
}
