use crate::assert_err;
use crate::errors::{ComparisonOperator, InputError, OptimError};
use crate::optimizer::{DEFAULT_BETA2, EPS, Optimizer, OptimizerConfig, UpdateRule};

#[test]
fn test_config_from_json_with_defaults() {
    let config: OptimizerConfig = serde_json::from_str(r#"{"kind": "adam", "beta1": 0.8}"#).unwrap();
    assert_eq!(
        config,
        OptimizerConfig::Adam {
            beta1: 0.8,
            beta2: DEFAULT_BETA2,
            eps: EPS,
        }
    );

    let config: OptimizerConfig = serde_json::from_str(r#"{"kind": "rmsprop"}"#).unwrap();
    assert_eq!(config, OptimizerConfig::rmsprop());

    let config: OptimizerConfig = serde_json::from_str(r#"{"kind": "sgd"}"#).unwrap();
    assert_eq!(config, OptimizerConfig::default());
}

#[test]
fn test_config_round_trip_names() {
    let json = serde_json::to_string(&OptimizerConfig::nesterov()).unwrap();
    assert!(json.contains(r#""kind":"nesterov""#));
}

#[test]
fn test_config_build_each_variant() {
    let configs = [
        (OptimizerConfig::Sgd, "sgd"),
        (OptimizerConfig::momentum(), "momentum"),
        (OptimizerConfig::nesterov(), "nesterov"),
        (OptimizerConfig::adagrad(), "adagrad"),
        (OptimizerConfig::rmsprop(), "rmsprop"),
        (OptimizerConfig::adam(), "adam"),
    ];
    for (config, name) in configs {
        let optimizer: Optimizer = config.build().unwrap();
        assert_eq!(optimizer.name(), name);
    }
}

#[test]
fn test_config_rejects_bad_hyperparameters() {
    assert_err!(
        OptimizerConfig::Momentum { gamma: 1. }.build(),
        OptimError::InvalidInput(InputError::ValueMustSatisfyComparison {
            operator: ComparisonOperator::LessThan,
            ..
        })
    );
    assert_err!(
        OptimizerConfig::Adam {
            beta1: -0.1,
            beta2: 0.999,
            eps: 1e-8
        }
        .validate(),
        OptimError::InvalidInput(InputError::ValueMustSatisfyComparison { value_name, .. }) if value_name == "beta1"
    );
    assert_err!(
        OptimizerConfig::Adagrad { eps: 0. }.validate(),
        OptimError::InvalidInput(InputError::ValueMustSatisfyComparison { value_name, .. }) if value_name == "eps"
    );
    assert_err!(OptimizerConfig::RmsProp { gamma: f32::NAN, eps: 1e-8 }.validate());
}

#[test]
fn test_config_unknown_kind() {
    let result = serde_json::from_str::<OptimizerConfig>(r#"{"kind": "lbfgs"}"#);
    assert!(result.is_err());
}
