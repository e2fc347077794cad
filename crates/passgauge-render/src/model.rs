#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub code: String,
    pub message: String,
    pub penalty: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEstimate {
    pub scenario: String,
    pub guesses_per_second: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub score: u8,
    pub label: String,
    pub verdict: RenderableVerdict,
    pub compliant: bool,
    pub policy_violations: Vec<String>,
    pub findings: Vec<RenderableFinding>,
    pub recommendations: Vec<String>,
    pub estimates: Vec<RenderableEstimate>,
}

impl RenderableSeverity {
    pub fn tag(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Critical => "CRIT",
        }
    }
}
