//! Gallery runner
//!
//! Plans every screen at every device preset, checks each plan's invariants,
//! and reports the results.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use vista_core::ResponsiveConfig;

use crate::devices::{DevicePreset, PRESETS};
use crate::plan::{PlanViolation, ScreenPlan};
use crate::screens::{all_screens, Screen};

/// Outcome of planning one screen at one device
#[derive(Debug)]
pub enum PlanOutcome {
    /// Plan produced and all invariants hold
    Passed(ScreenPlan),
    /// Plan produced but an invariant failed
    Violated {
        plan: ScreenPlan,
        violation: PlanViolation,
    },
    /// The screen could not be planned at all
    Errored(String),
}

/// Result of planning one screen at one device
#[derive(Debug)]
pub struct PlanRun {
    pub screen: String,
    pub device: String,
    pub outcome: PlanOutcome,
    pub duration: Duration,
}

impl PlanRun {
    pub fn is_passed(&self) -> bool {
        matches!(self.outcome, PlanOutcome::Passed(_))
    }

    pub fn plan(&self) -> Option<&ScreenPlan> {
        match &self.outcome {
            PlanOutcome::Passed(plan) | PlanOutcome::Violated { plan, .. } => Some(plan),
            PlanOutcome::Errored(_) => None,
        }
    }
}

/// Runs screens against device presets
pub struct GalleryRunner {
    config: ResponsiveConfig,
    screens: Vec<Box<dyn Screen>>,
    devices: Vec<DevicePreset>,
    filter: Option<String>,
}

impl Default for GalleryRunner {
    fn default() -> Self {
        Self::new(ResponsiveConfig::default())
    }
}

impl GalleryRunner {
    /// Runner over every example screen and every preset
    pub fn new(config: ResponsiveConfig) -> Self {
        Self {
            config,
            screens: all_screens(),
            devices: PRESETS.to_vec(),
            filter: None,
        }
    }

    /// Runner with no screens or devices
    pub fn empty(config: ResponsiveConfig) -> Self {
        Self {
            config,
            screens: Vec::new(),
            devices: Vec::new(),
            filter: None,
        }
    }

    pub fn add_screen(&mut self, screen: Box<dyn Screen>) -> &mut Self {
        self.screens.push(screen);
        self
    }

    pub fn add_device(&mut self, device: DevicePreset) -> &mut Self {
        self.devices.push(device);
        self
    }

    /// Only run screen/device pairs whose names contain `pattern`
    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    pub fn config(&self) -> &ResponsiveConfig {
        &self.config
    }

    /// Plan every selected screen at every device
    pub fn run(&self) -> GalleryResult {
        let start = Instant::now();
        let mut runs = Vec::new();

        for screen in &self.screens {
            tracing::info!("Planning screen: {}", screen.name());

            for device in &self.devices {
                if let Some(ref pattern) = self.filter {
                    if !screen.name().contains(pattern.as_str())
                        && !device.name.contains(pattern.as_str())
                    {
                        continue;
                    }
                }

                let run_start = Instant::now();
                let outcome = self.plan_one(screen.as_ref(), device);
                let duration = run_start.elapsed();

                match &outcome {
                    PlanOutcome::Passed(plan) => {
                        tracing::info!(
                            "  ✓ {} @ {} [{}] ({:?})",
                            screen.name(),
                            device.name,
                            plan.category,
                            duration
                        );
                    }
                    PlanOutcome::Violated { violation, .. } => {
                        tracing::error!("  ✗ {} @ {}: {}", screen.name(), device.name, violation);
                    }
                    PlanOutcome::Errored(e) => {
                        tracing::error!(
                            "  ✗ {} @ {} failed with error: {}",
                            screen.name(),
                            device.name,
                            e
                        );
                    }
                }

                runs.push(PlanRun {
                    screen: screen.name().to_string(),
                    device: device.name.to_string(),
                    outcome,
                    duration,
                });
            }
        }

        GalleryResult::new(runs, start.elapsed())
    }

    fn plan_one(&self, screen: &dyn Screen, device: &DevicePreset) -> PlanOutcome {
        let plan = device
            .viewport(&self.config)
            .and_then(|viewport| screen.plan(&viewport, &self.config));
        match plan {
            Ok(plan) => match plan.validate(&self.config) {
                Ok(()) => PlanOutcome::Passed(plan),
                Err(violation) => PlanOutcome::Violated { plan, violation },
            },
            Err(e) => PlanOutcome::Errored(e.to_string()),
        }
    }
}

/// Results from a gallery run
#[derive(Debug)]
pub struct GalleryResult {
    pub runs: Vec<PlanRun>,
    pub duration: Duration,
}

impl GalleryResult {
    pub fn new(runs: Vec<PlanRun>, duration: Duration) -> Self {
        Self { runs, duration }
    }

    pub fn passed(&self) -> usize {
        self.runs.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.runs.iter().filter(|r| !r.is_passed()).count()
    }

    pub fn total(&self) -> usize {
        self.runs.len()
    }

    pub fn all_passed(&self) -> bool {
        self.runs.iter().all(|r| r.is_passed())
    }

    /// Runs grouped by screen name
    pub fn by_screen(&self) -> BTreeMap<&str, Vec<&PlanRun>> {
        let mut map: BTreeMap<&str, Vec<&PlanRun>> = BTreeMap::new();
        for run in &self.runs {
            map.entry(run.screen.as_str()).or_default().push(run);
        }
        map
    }

    /// Every produced plan as a JSON array
    pub fn plans_json(&self) -> serde_json::Result<String> {
        let plans: Vec<&ScreenPlan> = self.runs.iter().filter_map(|r| r.plan()).collect();
        serde_json::to_string_pretty(&plans)
    }

    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║          GALLERY RESULTS SUMMARY         ║");
        println!("╠══════════════════════════════════════════╣");
        println!("║  Passed:  {:>5}                          ║", self.passed());
        println!("║  Failed:  {:>5}                          ║", self.failed());
        println!("║  Total:   {:>5}                          ║", self.total());
        println!("║  Time:    {:>8.2?}                      ║", self.duration);
        println!("╚══════════════════════════════════════════╝");

        if self.failed() > 0 {
            println!("\nFailed plans:");
            for run in &self.runs {
                match &run.outcome {
                    PlanOutcome::Passed(_) => {}
                    PlanOutcome::Violated { violation, .. } => {
                        println!("  ✗ {} @ {}: {}", run.screen, run.device, violation);
                    }
                    PlanOutcome::Errored(e) => {
                        println!("  ✗ {} @ {}: {}", run.screen, run.device, e);
                    }
                }
            }
        }
    }
}
