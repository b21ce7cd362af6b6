use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{ExternalId, NodeId, Position, RoadNetwork};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Note,
}

/// Step taken during traversal of a planned route.
///
/// Coordinates are reported as percentages of the network extent, the same
/// form route requests use.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub node: NodeId,
    pub id: ExternalId,
    pub x: f64,
    pub y: f64,
    /// Distance from the previous step in metres (zero for the first step).
    pub leg: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub distance: f64,
    pub expanded: usize,
    pub start: RouteStep,
    pub goal: RouteStep,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved node identifiers and positions.
    pub fn from_plan(network: &RoadNetwork, plan: &RoutePlan) -> Result<Self> {
        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<Position> = None;
        for (index, &node) in plan.steps.iter().enumerate() {
            let resolved = network.node(node).ok_or(Error::UnknownNode { node })?;
            let leg = previous
                .map(|position| {
                    position.distance_to(&resolved.position) * network.metric_scale()
                })
                .unwrap_or(0.0);
            previous = Some(resolved.position);

            steps.push(RouteStep {
                index,
                node,
                id: resolved.id,
                x: resolved.position.x * 100.0,
                y: resolved.position.y * 100.0,
                leg,
            });
        }

        let (Some(start), Some(goal)) = (steps.first().cloned(), steps.last().cloned()) else {
            return Err(Error::EmptyRoutePlan);
        };

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            distance: plan.distance,
            expanded: plan.expanded,
            start,
            goal,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Note => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.1} m, algorithm: {})",
            self.start.id, self.goal.id, self.hops, self.distance, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: node {} at ({:.2}, {:.2}) +{:.1} m",
                step.index, step.id, step.x, step.y, step.leg
            );
        }
        buffer
    }

    fn render_note(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.id.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined} ({:.0} m)\n", self.distance)
    }
}
