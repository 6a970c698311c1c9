use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    #[default]
    Unknown,
    Executing,
    Completed,
    Noop,
    Failed,
    Stopped,
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ExitStatus::Unknown => "UNKNOWN",
            ExitStatus::Executing => "EXECUTING",
            ExitStatus::Completed => "COMPLETED",
            ExitStatus::Noop => "NOOP",
            ExitStatus::Failed => "FAILED",
            ExitStatus::Stopped => "STOPPED",
        };
        f.write_str(code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepExecution {
    pub step_name: String,
    pub exit_status: ExitStatus,
}

impl StepExecution {
    pub fn new(step_name: impl Into<String>) -> Self {
        Self {
            step_name: step_name.into(),
            exit_status: ExitStatus::Executing,
        }
    }

    pub fn with_exit_status(mut self, exit_status: ExitStatus) -> Self {
        self.exit_status = exit_status;
        self
    }
}
