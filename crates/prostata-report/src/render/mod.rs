//! Point-in-time report of a registry.
//!
//! `Report::capture` reads every metric once, using a single clock reading
//! for all timers, and the result renders as aligned text or JSON.

use std::fmt::Write;

use serde::Serialize;

use prostata_core::{AttributeValue, Clock, Registry};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerLine {
    pub name: String,
    pub label: String,
    pub elapsed_secs: f64,
    pub running: bool,
    pub segments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterLine {
    pub name: String,
    pub label: String,
    pub value: i64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioLine {
    pub name: String,
    pub label: String,
    pub numerator: String,
    pub denominator: String,
    /// `None` when a reference is not a counter.
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeLine {
    pub name: String,
    pub label: String,
    pub value: AttributeValue,
}

/// Every metric of a registry, each kind in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub timers: Vec<TimerLine>,
    pub counters: Vec<CounterLine>,
    pub ratios: Vec<RatioLine>,
    pub attributes: Vec<AttributeLine>,
}

impl Report {
    pub fn capture<C: Clock>(registry: &Registry<C>) -> Self {
        let now = registry.clock().now();

        let timers = registry
            .timer_entries()
            .map(|(name, t)| TimerLine {
                name: name.to_string(),
                label: t.label.clone(),
                elapsed_secs: t.elapsed_at(now).as_secs_f64(),
                running: t.is_running(),
                segments: t.segments,
            })
            .collect();

        let counters = registry
            .counter_entries()
            .map(|(name, c)| CounterLine {
                name: name.to_string(),
                label: c.label.clone(),
                value: c.value,
                unit: c.unit.clone(),
            })
            .collect();

        let ratios = registry
            .ratio_entries()
            .map(|(name, r)| {
                let value = match registry.ratio_value(name) {
                    Ok(v) => Some(v),
                    Err(e) => {
                        tracing::warn!(metric = name, error = %e, "ratio not computable");
                        None
                    }
                };
                RatioLine {
                    name: name.to_string(),
                    label: r.label.clone(),
                    numerator: r.numerator.clone(),
                    denominator: r.denominator.clone(),
                    value,
                }
            })
            .collect();

        let attributes = registry
            .attribute_entries()
            .map(|(name, a)| AttributeLine {
                name: name.to_string(),
                label: a.label.clone(),
                value: a.value.clone(),
            })
            .collect();

        Self { timers, counters, ratios, attributes }
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
            && self.counters.is_empty()
            && self.ratios.is_empty()
            && self.attributes.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One section per non-empty kind; columns are label, name, value.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        render_section(
            &mut out,
            "timers",
            self.timers.iter().map(|t| {
                let state = if t.running { "running" } else { "stopped" };
                let value = format!("{:.6} s ({state}, segments={})", t.elapsed_secs, t.segments);
                [t.label.clone(), t.name.clone(), value]
            }),
        );
        render_section(
            &mut out,
            "counters",
            self.counters
                .iter()
                .map(|c| [c.label.clone(), c.name.clone(), format!("{} {}", c.value, c.unit)]),
        );
        render_section(
            &mut out,
            "ratios",
            self.ratios.iter().map(|r| {
                let value = match r.value {
                    Some(v) => format!("{v:.4} ({}/{})", r.numerator, r.denominator),
                    None => format!("n/a ({}/{})", r.numerator, r.denominator),
                };
                [r.label.clone(), r.name.clone(), value]
            }),
        );
        render_section(
            &mut out,
            "attributes",
            self.attributes
                .iter()
                .map(|a| [a.label.clone(), a.name.clone(), a.value.to_string()]),
        );
        out
    }
}

fn render_section(out: &mut String, title: &str, rows: impl Iterator<Item = [String; 3]>) {
    let rows: Vec<[String; 3]> = rows.collect();
    if rows.is_empty() {
        return;
    }
    let label_w = rows.iter().map(|r| r[0].chars().count()).max().unwrap_or(0);
    let name_w = rows.iter().map(|r| r[1].chars().count()).max().unwrap_or(0);

    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "[{title}]");
    for [label, name, value] in rows {
        let _ = writeln!(out, "{label:<label_w$}  {name:<name_w$}  {value}");
    }
}
