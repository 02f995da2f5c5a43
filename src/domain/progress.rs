use log::info;

/// Counts how roster members of one team were looked up
pub struct LookupProgress {
    team: String,
    total: usize,
    resolved: usize,
    unresolved: usize,
    failed: usize,
}

impl LookupProgress {
    pub fn new(team: &str, total: usize) -> Self {
        Self {
            team: team.to_string(),
            total,
            resolved: 0,
            unresolved: 0,
            failed: 0,
        }
    }

    /// Member resolved and ratings fetched
    pub fn increment_resolved(&mut self) {
        self.resolved += 1;
        self.log_progress();
    }

    /// No candidate matched the member's name
    pub fn increment_unresolved(&mut self) {
        self.unresolved += 1;
        self.log_progress();
    }

    /// Search or rating lookup failed
    pub fn increment_failed(&mut self) {
        self.failed += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.resolved + self.unresolved + self.failed
    }

    pub fn resolved(&self) -> usize {
        self.resolved
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → {}: {}/{} looked up ({} resolved, {} unresolved, {} failed)",
                self.team, current, self.total, self.resolved, self.unresolved, self.failed
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || current == total
}

fn is_milestone(count: usize) -> bool {
    count % 5 == 0
}
