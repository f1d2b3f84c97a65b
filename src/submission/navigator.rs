//! Navigator implementations

use std::io::Write;

use crate::error::{OnboardError, OnboardResult};

use super::Navigator;

/// Remembers every route it was asked to open
#[derive(Debug, Clone, Default)]
pub struct RouteRecorder {
    routes: Vec<String>,
}

impl RouteRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes in the order they were opened
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// Most recent route
    pub fn current(&self) -> Option<&str> {
        self.routes.last().map(String::as_str)
    }

    /// How many times `route` was opened
    pub fn visits(&self, route: &str) -> usize {
        self.routes.iter().filter(|r| *r == route).count()
    }
}

impl Navigator for RouteRecorder {
    fn navigate(&mut self, route: &str) -> OnboardResult<()> {
        tracing::debug!(route, "navigating");
        self.routes.push(route.to_string());
        Ok(())
    }
}

/// Announces the route on a writer (stdout for the prompt wizard)
pub struct ConsoleNavigator<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for ConsoleNavigator<W> {
    fn navigate(&mut self, route: &str) -> OnboardResult<()> {
        tracing::debug!(route, "navigating");
        writeln!(self.out, "Opening your dashboard at {}", route)
            .map_err(|e| OnboardError::Io(format!("Failed to write route: {}", e)))
    }
}
