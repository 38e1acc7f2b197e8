use crate::chemistry::{abundance, gas_to_dust};
use crate::error::ModelError;

#[test]
fn constant_fields() {
    let abund = abundance(5e-8, 27).unwrap();
    assert_eq!(abund.len(), 27);
    assert!(abund.iter().all(|&a| a == 5e-8));

    let gtd = gas_to_dust(100.0, 8).unwrap();
    assert_eq!(gtd, vec![100.0; 8]);

    assert!(abundance(0.0, 0).unwrap().is_empty());
}

#[test]
fn invalid_values_rejected() {
    assert!(matches!(
        abundance(-1e-8, 4),
        Err(ModelError::InvalidParameter { name: "abundance", .. })
    ));
    assert!(matches!(
        gas_to_dust(f64::NAN, 4),
        Err(ModelError::InvalidParameter { name: "gtd", .. })
    ));
}
