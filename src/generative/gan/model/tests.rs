//! Tests for the GAN model records.

use super::*;
use crate::generative::gan::error::GanError;
use crate::generative::gan::field::FieldValue;
use crate::generative::gan::handles::{
    Categorical, DiscriminatorFn, DistributionRef, GeneratorFn, Scope, Tensor, Variable,
};
use crate::generative::gan::record::Record;
use proptest::prelude::*;

/// Small model wired through real generator/discriminator closures
fn test_gan_model() -> GanModel {
    let generator_scope = Scope::new("generator");
    let discriminator_scope = Scope::new("discriminator");
    let generator_fn = GeneratorFn::new("affine", |z: &Tensor| {
        Ok(Tensor::new("generated", z.data() * 2.0 + 1.0))
    });
    let discriminator_fn = DiscriminatorFn::new("mean", |data: &Tensor, _z: &Tensor| {
        Ok(Tensor::scalar("score", data.data().mean().unwrap_or(0.0)))
    });

    let generator_inputs = Tensor::from_vec("z", vec![0.0, 0.5, 1.0]);
    let generated_data = generator_fn.call(&generator_inputs).expect("generator runs");
    let real_data = Tensor::from_vec("real", vec![1.0, 2.0, 3.0]);
    let discriminator_real_outputs =
        discriminator_fn.call(&real_data, &generator_inputs).expect("discriminator runs");
    let discriminator_gen_outputs =
        discriminator_fn.call(&generated_data, &generator_inputs).expect("discriminator runs");

    GanModel::new(
        generator_inputs,
        generated_data,
        vec![Variable::trainable(generator_scope.variable_name("w"), Tensor::scalar("w", 2.0))],
        generator_scope,
        generator_fn,
        real_data,
        discriminator_real_outputs,
        discriminator_gen_outputs,
        vec![Variable::trainable(discriminator_scope.variable_name("w"), Tensor::scalar("w", 1.0))],
        discriminator_scope,
        discriminator_fn,
    )
}

fn test_info_gan_model() -> InfoGanModel {
    let logits = Tensor::new("logits", ndarray::arr2(&[[0.1f32, 0.9]]).into_dyn());
    InfoGanModel::new(
        test_gan_model(),
        vec![Tensor::one_hot("c", &[1], 2).expect("label in range")],
        vec![DistributionRef::new(Categorical::new(logits))],
    )
}

fn test_ac_gan_model() -> AcGanModel {
    AcGanModel::new(
        test_gan_model(),
        Tensor::one_hot("labels", &[0, 2], 3).expect("labels in range"),
        Tensor::from_vec("real_logits", vec![0.2, 0.3, 0.5]),
        Tensor::from_vec("gen_logits", vec![0.6, 0.3, 0.1]),
    )
}

#[test]
fn test_gan_model_field_order() {
    assert_eq!(
        GanModel::FIELDS,
        &[
            "generator_inputs",
            "generated_data",
            "generator_variables",
            "generator_scope",
            "generator_fn",
            "real_data",
            "discriminator_real_outputs",
            "discriminator_gen_outputs",
            "discriminator_variables",
            "discriminator_scope",
            "discriminator_fn",
        ]
    );
}

#[test]
fn test_extended_field_lists_keep_base_prefix() {
    assert_eq!(&InfoGanModel::FIELDS[..11], GanModel::FIELDS);
    assert_eq!(
        &InfoGanModel::FIELDS[11..],
        &["structured_generator_inputs", "predicted_distributions"]
    );
    assert_eq!(&AcGanModel::FIELDS[..11], GanModel::FIELDS);
    assert_eq!(
        &AcGanModel::FIELDS[11..],
        &[
            "one_hot_labels",
            "discriminator_real_classification_logits",
            "discriminator_gen_classification_logits",
        ]
    );
}

#[test]
fn test_gan_model_generated_through_generator_fn() {
    let model = test_gan_model();
    assert_eq!(model.generated_data.data().iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    assert_eq!(model.discriminator_real_outputs.as_scalar(), Some(2.0));
    assert_eq!(model.generator_scope.filter_variables(&model.generator_variables).len(), 1);
}

#[test]
fn test_gan_model_fields_round_trip() {
    let model = test_gan_model();
    let rebuilt = GanModel::from_fields(model.clone().into_fields()).expect("same field list");
    assert_eq!(rebuilt, model);
    assert!(rebuilt.generator_inputs.shares_data(&model.generator_inputs));
}

#[test]
fn test_gan_model_field_by_name() {
    let model = test_gan_model();
    assert_eq!(
        model.field("real_data").expect("known field"),
        FieldValue::Tensor(model.real_data.clone())
    );
    assert_eq!(
        model.field("discriminator_scope").expect("known field"),
        FieldValue::Scope(Scope::new("discriminator"))
    );
    assert!(matches!(model.field("recognizer"), Err(GanError::UnknownField { .. })));
}

#[test]
fn test_gan_model_equality() {
    let model = test_gan_model();
    assert_eq!(model, model.clone());

    let mut other = model.clone();
    other.real_data = Tensor::from_vec("real", vec![1.0, 2.0, 4.0]);
    assert_ne!(model, other);

    // Independently built closures are different functions
    assert_ne!(model, test_gan_model());
}

#[test]
fn test_gan_model_arity_errors() {
    let mut values = test_gan_model().into_fields();
    values.pop();
    assert_eq!(
        GanModel::from_fields(values).unwrap_err(),
        GanError::ArityMismatch { schema: "GanModel", expected: 11, got: 10 }
    );

    let mut values = test_gan_model().into_fields();
    values.push(FieldValue::Steps(1));
    assert_eq!(
        GanModel::from_fields(values).unwrap_err(),
        GanError::ArityMismatch { schema: "GanModel", expected: 11, got: 12 }
    );
}

#[test]
fn test_gan_model_wrong_kind() {
    let mut values = test_gan_model().into_fields();
    values.swap(0, 3);
    assert_eq!(
        GanModel::from_fields(values).unwrap_err(),
        GanError::FieldType {
            schema: "GanModel",
            field: "generator_inputs",
            expected: "tensor",
            got: "scope",
        }
    );
}

#[test]
fn test_gan_model_replace_keeps_original() {
    let model = test_gan_model();
    let replaced = model
        .replace("generator_scope", Scope::new("gen_v2").into())
        .expect("known field of the right kind");
    assert_eq!(replaced.generator_scope.name(), "gen_v2");
    assert_eq!(model.generator_scope.name(), "generator");
    assert_eq!(replaced.generated_data, model.generated_data);
}

#[test]
fn test_gan_model_from_named_any_order() {
    let model = test_gan_model();
    let mut pairs = model.to_pairs();
    pairs.reverse();
    let rebuilt = GanModel::from_named(pairs).expect("every field once");
    assert_eq!(rebuilt, model);
}

#[test]
fn test_gan_model_from_named_errors() {
    let model = test_gan_model();

    let mut pairs = model.to_pairs();
    pairs.retain(|(name, _)| *name != "real_data");
    assert_eq!(
        GanModel::from_named(pairs).unwrap_err(),
        GanError::MissingField { schema: "GanModel", field: "real_data" }
    );

    let mut pairs = model.to_pairs();
    pairs.push(("real_data", model.real_data.clone().into()));
    assert!(matches!(GanModel::from_named(pairs), Err(GanError::DuplicateField { .. })));

    let mut pairs = model.to_pairs();
    pairs.push(("recognizer_fn", FieldValue::Steps(0)));
    assert!(matches!(GanModel::from_named(pairs), Err(GanError::UnknownField { .. })));
}

#[test]
fn test_info_gan_prefix_matches_gan_model() {
    let info = test_info_gan_model();
    let values = info.clone().into_fields();
    assert_eq!(values.len(), 13);

    let base = GanModel::from_fields(values[..11].to_vec()).expect("base prefix");
    assert_eq!(&base, info.as_gan_model());
    assert_eq!(AsRef::<GanModel>::as_ref(&info), &info.gan);
    assert_eq!(InfoGanModel::from_fields(values).expect("full list"), info);
}

#[test]
fn test_info_gan_length_check_is_opt_in() {
    let mut info = test_info_gan_model();
    assert!(info.check_structured_inputs().is_ok());
    assert_eq!(info.structured_pairs().expect("equal lengths").len(), 1);

    info.structured_generator_inputs.push(Tensor::from_vec("c2", vec![0.3]));
    assert_eq!(
        info.check_structured_inputs().unwrap_err(),
        GanError::LengthMismatch {
            schema: "InfoGanModel",
            left: "structured_generator_inputs",
            left_len: 2,
            right: "predicted_distributions",
            right_len: 1,
        }
    );
    assert!(info.structured_pairs().is_err());
}

#[test]
fn test_info_gan_unequal_lists_still_construct() {
    let info = test_info_gan_model();
    let replaced = info
        .replace("predicted_distributions", FieldValue::Distributions(Vec::new()))
        .expect("construction does not check lengths");
    assert!(replaced.predicted_distributions.is_empty());
}

#[test]
fn test_info_gan_predicted_distribution_log_prob() {
    let info = test_info_gan_model();
    let pairs = info.structured_pairs().expect("equal lengths");
    let (code, dist) = pairs[0];
    let log_prob = dist.log_prob(code).expect("shapes match");
    assert!(log_prob.data()[[0]] < 0.0);
}

#[test]
fn test_ac_gan_fields() {
    let ac = test_ac_gan_model();
    assert_eq!(ac.num_classes(), Some(3));
    assert_eq!(ac.as_gan_model(), &ac.gan);

    let values = ac.clone().into_fields();
    assert_eq!(values.len(), AcGanModel::FIELDS.len());
    assert_eq!(values[11], FieldValue::Tensor(ac.one_hot_labels.clone()));
    assert_eq!(AcGanModel::from_fields(values).expect("full list"), ac);
}

#[test]
fn test_ac_gan_arity_error_names_schema() {
    let values = test_gan_model().into_fields();
    assert_eq!(
        AcGanModel::from_fields(values).unwrap_err(),
        GanError::ArityMismatch { schema: "AcGanModel", expected: 14, got: 11 }
    );
}

#[test]
fn test_records_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GanModel>();
    assert_send_sync::<InfoGanModel>();
    assert_send_sync::<AcGanModel>();
}

#[test]
fn test_field_order_stable() {
    let model = test_gan_model();
    let first: Vec<&str> = model.to_pairs().into_iter().map(|(name, _)| name).collect();
    let second: Vec<&str> = model.to_pairs().into_iter().map(|(name, _)| name).collect();
    assert_eq!(first, second);
    assert_eq!(first, GanModel::FIELDS);
}

proptest! {
    #[test]
    fn prop_replace_then_read_back(values in proptest::collection::vec(-10.0f32..10.0, 1..16)) {
        let model = test_gan_model();
        let real = Tensor::from_vec("real", values);
        let replaced = model.replace("real_data", real.clone().into()).expect("tensor field");
        prop_assert_eq!(replaced.field("real_data").expect("known field"), FieldValue::Tensor(real));
        prop_assert_eq!(&replaced.generator_fn, &model.generator_fn);
    }
}
