use super::draft::{Draft, AUTO_NAME};
use crate::error::Rejection;
use crate::types::{
    ColumnConfig, ColumnKind, FormulaParams, LagParams, PercentChangeParams, RollingParams,
};

/// Evaluate the draft as the given kind.
pub fn evaluate(kind: ColumnKind, draft: &mut Draft) -> Result<ColumnConfig, Rejection> {
    match kind {
        ColumnKind::Lag => try_lag(draft),
        ColumnKind::PercentChange => try_percent_change(draft),
        ColumnKind::Formula => try_formula(draft),
        ColumnKind::Rolling => try_rolling(draft),
        ColumnKind::Indicator => Err(Rejection::Unsupported(ColumnKind::Indicator)),
    }
}

pub fn evaluate_lag(draft: &mut Draft) -> Option<ColumnConfig> {
    try_lag(draft).ok()
}

pub fn evaluate_percent_change(draft: &mut Draft) -> Option<ColumnConfig> {
    try_percent_change(draft).ok()
}

pub fn evaluate_rolling(draft: &mut Draft) -> Option<ColumnConfig> {
    try_rolling(draft).ok()
}

pub fn evaluate_formula(draft: &mut Draft) -> Option<ColumnConfig> {
    try_formula(draft).ok()
}

fn name_or_auto(draft: &mut Draft) -> String {
    draft
        .column_name
        .get_or_insert_with(|| AUTO_NAME.to_string())
        .clone()
}

/// Period shared by percent change and rolling columns: set, non-zero, and
/// no zero lag adjustment.
fn checked_period(draft: &Draft) -> Result<i64, Rejection> {
    let period = draft.period.ok_or(Rejection::MissingPeriod)?;
    if draft.lag.is_some_and(|lag| lag.is_zero()) {
        return Err(Rejection::ZeroLag);
    }
    if period == 0 {
        return Err(Rejection::ZeroPeriod);
    }
    Ok(period)
}

fn try_lag(draft: &mut Draft) -> Result<ColumnConfig, Rejection> {
    let col_name = name_or_auto(draft);
    let period = draft.period.ok_or(Rejection::MissingPeriod)?;

    Ok(ColumnConfig::Lag(LagParams {
        period,
        col_name,
        on: draft.on.clone(),
    }))
}

fn try_percent_change(draft: &mut Draft) -> Result<ColumnConfig, Rejection> {
    let col_name = name_or_auto(draft);
    let period = checked_period(draft)?;

    // TODO: confirm how the backend treats negative lag before clamping it here
    Ok(ColumnConfig::PercentChange(PercentChangeParams {
        on: draft.on.clone(),
        period,
        col_name,
        lag: draft.lag,
    }))
}

fn try_rolling(draft: &mut Draft) -> Result<ColumnConfig, Rejection> {
    let col_name = name_or_auto(draft);
    let window = checked_period(draft)?;

    Ok(ColumnConfig::Rolling(RollingParams {
        on: draft.on.clone(),
        window,
        col_name,
        function: draft.function,
        lag: draft.lag,
    }))
}

fn try_formula(draft: &mut Draft) -> Result<ColumnConfig, Rejection> {
    let col_name = draft
        .column_name
        .clone()
        .ok_or(Rejection::MissingColumnName)?;
    let formula = draft.formula.clone().ok_or(Rejection::MissingFormula)?;

    Ok(ColumnConfig::Formula(FormulaParams { formula, col_name }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LagAdjustment;

    #[test]
    fn test_rejection_reasons() {
        let mut draft = Draft { period: None, ..Draft::default() };
        assert_eq!(evaluate(ColumnKind::Rolling, &mut draft), Err(Rejection::MissingPeriod));

        let mut draft = Draft { period: Some(0), ..Draft::default() };
        assert_eq!(evaluate(ColumnKind::PercentChange, &mut draft), Err(Rejection::ZeroPeriod));

        let mut draft = Draft { lag: Some(LagAdjustment::Periods(0)), ..Draft::default() };
        assert_eq!(evaluate(ColumnKind::PercentChange, &mut draft), Err(Rejection::ZeroLag));

        let mut draft = Draft::default();
        assert_eq!(evaluate(ColumnKind::Formula, &mut draft), Err(Rejection::MissingColumnName));

        let mut draft = Draft { column_name: Some("x".to_string()), ..Draft::default() };
        assert_eq!(evaluate(ColumnKind::Formula, &mut draft), Err(Rejection::MissingFormula));
    }

    #[test]
    fn test_indicator_is_unsupported() {
        let mut draft = Draft::default();
        assert_eq!(
            evaluate(ColumnKind::Indicator, &mut draft),
            Err(Rejection::Unsupported(ColumnKind::Indicator))
        );
    }

    #[test]
    fn test_auto_name_written_back_even_on_rejection() {
        let mut draft = Draft { period: None, ..Draft::default() };
        assert!(evaluate_lag(&mut draft).is_none());
        assert_eq!(draft.column_name.as_deref(), Some(AUTO_NAME));
    }

    #[test]
    fn test_zero_lag_does_not_affect_lag_columns() {
        let mut draft = Draft { lag: Some(LagAdjustment::Flag(false)), ..Draft::default() };
        assert!(evaluate_lag(&mut draft).is_some());
    }
}
