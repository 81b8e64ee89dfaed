use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column definition category selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Lag,
    PercentChange,
    Formula,
    Rolling,
    Indicator,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 5] = [
        ColumnKind::Lag,
        ColumnKind::PercentChange,
        ColumnKind::Formula,
        ColumnKind::Rolling,
        ColumnKind::Indicator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Lag => "lag",
            ColumnKind::PercentChange => "percent_change",
            ColumnKind::Formula => "formula",
            ColumnKind::Rolling => "rolling",
            ColumnKind::Indicator => "indicator",
        }
    }

    /// One-letter code the backend dispatches on.
    pub fn tag(&self) -> char {
        match self {
            ColumnKind::Lag => 'L',
            ColumnKind::PercentChange => 'P',
            ColumnKind::Formula => 'F',
            ColumnKind::Rolling => 'R',
            ColumnKind::Indicator => 'I',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Lag => "Lag",
            ColumnKind::PercentChange => "Percent Change",
            ColumnKind::Formula => "Formula",
            ColumnKind::Rolling => "Rolling Window",
            ColumnKind::Indicator => "Indicator",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown column kind: {}", s))
    }
}

/// Aggregation applied over a rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollingFunction {
    Count,
    Sum,
    #[default]
    Mean,
    Max,
    Min,
    Var,
    Std,
    Zscore,
}

impl RollingFunction {
    pub const ALL: [RollingFunction; 8] = [
        RollingFunction::Count,
        RollingFunction::Sum,
        RollingFunction::Mean,
        RollingFunction::Max,
        RollingFunction::Min,
        RollingFunction::Var,
        RollingFunction::Std,
        RollingFunction::Zscore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RollingFunction::Count => "count",
            RollingFunction::Sum => "sum",
            RollingFunction::Mean => "mean",
            RollingFunction::Max => "max",
            RollingFunction::Min => "min",
            RollingFunction::Var => "var",
            RollingFunction::Std => "std",
            RollingFunction::Zscore => "zscore",
        }
    }
}

impl fmt::Display for RollingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollingFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RollingFunction::ALL
            .into_iter()
            .find(|func| func.as_str() == s)
            .ok_or_else(|| format!("Unknown rolling function: {}", s))
    }
}

/// Extra lag applied on top of a percent change or rolling column.
///
/// The form accepts either a bar count or a plain on/off flag, and the
/// backend receives whichever one was entered as a bare JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LagAdjustment {
    Flag(bool),
    Periods(i64),
}

impl LagAdjustment {
    /// `0` and `false` both count as zero.
    pub fn is_zero(&self) -> bool {
        match self {
            LagAdjustment::Flag(flag) => !flag,
            LagAdjustment::Periods(periods) => *periods == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagParams {
    pub period: i64,
    pub col_name: String,
    pub on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentChangeParams {
    pub on: String,
    pub period: i64,
    pub col_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lag: Option<LagAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingParams {
    pub on: String,
    pub window: i64,
    pub col_name: String,
    pub function: RollingFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lag: Option<LagAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaParams {
    pub formula: String,
    pub col_name: String,
}

/// A single accepted column definition, keyed by its one-letter tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnConfig {
    #[serde(rename = "L")]
    Lag(LagParams),
    #[serde(rename = "P")]
    PercentChange(PercentChangeParams),
    #[serde(rename = "F")]
    Formula(FormulaParams),
    #[serde(rename = "R")]
    Rolling(RollingParams),
}

impl ColumnConfig {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnConfig::Lag(_) => ColumnKind::Lag,
            ColumnConfig::PercentChange(_) => ColumnKind::PercentChange,
            ColumnConfig::Formula(_) => ColumnKind::Formula,
            ColumnConfig::Rolling(_) => ColumnKind::Rolling,
        }
    }

    pub fn col_name(&self) -> &str {
        match self {
            ColumnConfig::Lag(p) => &p.col_name,
            ColumnConfig::PercentChange(p) => &p.col_name,
            ColumnConfig::Formula(p) => &p.col_name,
            ColumnConfig::Rolling(p) => &p.col_name,
        }
    }

    /// Short human-readable summary for the column list.
    pub fn describe(&self) -> String {
        match self {
            ColumnConfig::Lag(p) => format!("lag({}, {})", p.on, p.period),
            ColumnConfig::PercentChange(p) => match p.lag {
                Some(lag) => format!("pct_change({}, {}) lag {}", p.on, p.period, lag_text(lag)),
                None => format!("pct_change({}, {})", p.on, p.period),
            },
            ColumnConfig::Formula(p) => p.formula.clone(),
            ColumnConfig::Rolling(p) => match p.lag {
                Some(lag) => format!(
                    "rolling {}({}, {}) lag {}",
                    p.function, p.on, p.window, lag_text(lag)
                ),
                None => format!("rolling {}({}, {})", p.function, p.on, p.window),
            },
        }
    }
}

fn lag_text(lag: LagAdjustment) -> String {
    match lag {
        LagAdjustment::Flag(flag) => flag.to_string(),
        LagAdjustment::Periods(periods) => periods.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parses_form_values() {
        assert_eq!("percent_change".parse::<ColumnKind>().unwrap(), ColumnKind::PercentChange);
        assert_eq!("indicator".parse::<ColumnKind>().unwrap(), ColumnKind::Indicator);
        assert!("macd".parse::<ColumnKind>().is_err());
    }

    #[test]
    fn test_kind_tags() {
        let tags: String = ColumnKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, "LPFRI");
    }

    #[test]
    fn test_rolling_function_names() {
        assert_eq!(serde_json::to_value(RollingFunction::Zscore).unwrap(), json!("zscore"));
        assert_eq!("var".parse::<RollingFunction>().unwrap(), RollingFunction::Var);
        assert_eq!(RollingFunction::default(), RollingFunction::Mean);
    }

    #[test]
    fn test_lag_adjustment_zero_like() {
        assert!(LagAdjustment::Periods(0).is_zero());
        assert!(LagAdjustment::Flag(false).is_zero());
        assert!(!LagAdjustment::Periods(-1).is_zero());
        assert!(!LagAdjustment::Flag(true).is_zero());
    }

    #[test]
    fn test_optional_lag_is_omitted() {
        let column = ColumnConfig::PercentChange(PercentChangeParams {
            on: "close".to_string(),
            period: 3,
            col_name: "auto".to_string(),
            lag: None,
        });
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({ "P": { "on": "close", "period": 3, "col_name": "auto" } })
        );
    }

    #[test]
    fn test_flag_lag_serializes_as_bool() {
        let column = ColumnConfig::Rolling(RollingParams {
            on: "close".to_string(),
            window: 20,
            col_name: "vol".to_string(),
            function: RollingFunction::Std,
            lag: Some(LagAdjustment::Flag(true)),
        });
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({ "R": { "on": "close", "window": 20, "col_name": "vol", "function": "std", "lag": true } })
        );
    }

    #[test]
    fn test_backend_payload_parses() {
        let column: ColumnConfig =
            serde_json::from_str(r#"{"F": {"formula": "high-low", "col_name": "range"}}"#).unwrap();
        assert_eq!(column.kind(), ColumnKind::Formula);
        assert_eq!(column.col_name(), "range");
    }
}
