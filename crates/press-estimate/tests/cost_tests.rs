use press_estimate::*;

fn sample() -> CostEstimationInput {
    CostEstimationInput {
        page_count: 200.0,
        print_run_size: 1000.0,
        cost_per_page: 0.15,
        cover_price: 49.90,
        royalty_percent: 10.0,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn expect_invalid(input: CostEstimationInput, expected_field: &str, expected_reason: InvalidReason) {
    match estimate_cost(&input) {
        Err(EstimateError::Validation { field, reason }) => {
            assert_eq!(field, expected_field);
            assert_eq!(reason, expected_reason);
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_reference_print_run() {
    let result = estimate_cost(&sample()).unwrap();

    assert_close(result.unit_production_cost, 30.0);
    assert_close(result.total_production_cost, 30_000.0);
    assert_close(result.gross_revenue, 49_900.0);
    assert_close(result.total_author_royalties, 4_990.0);
    assert_close(result.publisher_profit, 14_910.0);
    assert_close(result.profit_per_unit, 14.91);
}

#[test]
fn test_loss_is_negative() {
    let input = CostEstimationInput {
        cover_price: 20.0,
        ..sample()
    };
    let result = estimate_cost(&input).unwrap();
    // 20000 revenue - 30000 production - 2000 royalties
    assert_close(result.publisher_profit, -12_000.0);
    assert_close(result.profit_per_unit, -12.0);
}

#[test]
fn test_zero_print_run_is_rejected() {
    let input = CostEstimationInput {
        print_run_size: 0.0,
        ..sample()
    };
    assert!(matches!(
        estimate_cost(&input),
        Err(EstimateError::DivisionByZero)
    ));

    let input = CostEstimationInput {
        print_run_size: -10.0,
        ..sample()
    };
    assert!(matches!(
        estimate_cost(&input),
        Err(EstimateError::DivisionByZero)
    ));
}

#[test]
fn test_non_finite_inputs_rejected() {
    expect_invalid(
        CostEstimationInput {
            page_count: f64::NAN,
            ..sample()
        },
        "page_count",
        InvalidReason::NotFinite,
    );
    expect_invalid(
        CostEstimationInput {
            print_run_size: f64::INFINITY,
            ..sample()
        },
        "print_run_size",
        InvalidReason::NotFinite,
    );
    expect_invalid(
        CostEstimationInput {
            cover_price: f64::NEG_INFINITY,
            ..sample()
        },
        "cover_price",
        InvalidReason::NotFinite,
    );
}

#[test]
fn test_range_checks() {
    expect_invalid(
        CostEstimationInput {
            page_count: 0.0,
            ..sample()
        },
        "page_count",
        InvalidReason::NotPositive,
    );
    expect_invalid(
        CostEstimationInput {
            cost_per_page: -0.01,
            ..sample()
        },
        "cost_per_page",
        InvalidReason::Negative,
    );
    expect_invalid(
        CostEstimationInput {
            royalty_percent: 150.0,
            ..sample()
        },
        "royalty_percent",
        InvalidReason::OutOfRange,
    );
    expect_invalid(
        CostEstimationInput {
            royalty_percent: -1.0,
            ..sample()
        },
        "royalty_percent",
        InvalidReason::Negative,
    );
}

#[test]
fn test_royalty_bounds_are_inclusive() {
    let free = CostEstimationInput {
        royalty_percent: 0.0,
        ..sample()
    };
    assert_close(estimate_cost(&free).unwrap().total_author_royalties, 0.0);

    let all = CostEstimationInput {
        royalty_percent: 100.0,
        ..sample()
    };
    let result = estimate_cost(&all).unwrap();
    assert_close(result.total_author_royalties, result.gross_revenue);
    assert_close(result.publisher_profit, -30_000.0);
}

#[test]
fn test_overflowing_result_rejected() {
    let input = CostEstimationInput {
        page_count: 1e200,
        print_run_size: 1e200,
        cost_per_page: 1.0,
        cover_price: 1.0,
        royalty_percent: 0.0,
    };
    expect_invalid(input, "total_production_cost", InvalidReason::Overflow);
}

#[test]
fn test_idempotent() {
    let first = estimate_cost(&sample()).unwrap();
    let second = estimate_cost(&sample()).unwrap();
    assert_eq!(first.publisher_profit.to_bits(), second.publisher_profit.to_bits());
    assert_eq!(first.profit_per_unit.to_bits(), second.profit_per_unit.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_break_even_cover_price() {
    let price = sample().break_even_cover_price().unwrap().unwrap();
    // 30 per copy with 90 % kept by the publisher
    assert_close(price, 30.0 / 0.9);

    let at_break_even = CostEstimationInput {
        cover_price: price,
        ..sample()
    };
    assert_close(estimate_cost(&at_break_even).unwrap().publisher_profit, 0.0);

    let all_royalty = CostEstimationInput {
        royalty_percent: 100.0,
        ..sample()
    };
    assert_eq!(all_royalty.break_even_cover_price().unwrap(), None);
}
