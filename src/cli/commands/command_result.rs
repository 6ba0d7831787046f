use crate::issue::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub resources: usize,
    pub groups: usize,
    pub files_written: usize,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub resources: usize,
    pub files_checked: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a resgen command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues accumulated during the run; empty for `init`.
    pub issues: Vec<Issue>,
}
