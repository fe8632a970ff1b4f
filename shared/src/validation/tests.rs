use super::*;
use crate::{AdresseInscription, Entreprise};

// =========================================================
// Fixtures
// =========================================================

fn demande(role: Role, company: Entreprise) -> DemandeInscription {
    DemandeInscription {
        last_name: "Dubois".to_string(),
        first_name: "Marie".to_string(),
        email: "marie@exemple.fr".to_string(),
        password: "kawa1234".to_string(),
        phone: "0601020304".to_string(),
        role,
        company,
        address: AdresseInscription::default(),
    }
}

fn demande_professionnelle(siret: &str) -> DemandeInscription {
    demande(
        Role::Professionnel,
        Entreprise {
            name: Some("Café Central".to_string()),
            siret: Some(siret.to_string()),
        },
    )
}

// =========================================================
// Confirmation du mot de passe
// =========================================================

#[test]
fn mots_de_passe_differents_refuses() {
    let d = demande(Role::Particulier, Entreprise::default());
    assert_eq!(
        valider_inscription(&d, "autre"),
        Err(ErreurValidation::MotsDePasseDifferents)
    );
}

#[test]
fn particulier_valide_sans_societe() {
    let d = demande(Role::Particulier, Entreprise::default());
    assert_eq!(valider_inscription(&d, "kawa1234"), Ok(()));
}

// =========================================================
// Champs professionnels
// =========================================================

#[test]
fn professionnel_sans_nom_de_societe_refuse() {
    let d = demande(
        Role::Professionnel,
        Entreprise {
            name: Some("   ".to_string()),
            siret: Some("123456789".to_string()),
        },
    );
    assert_eq!(
        valider_inscription(&d, "kawa1234"),
        Err(ErreurValidation::NomSocieteManquant)
    );
}

#[test]
fn siret_trop_court_refuse() {
    // 8 caractères : sous la borne basse.
    let d = demande_professionnelle("12345678");
    assert_eq!(
        valider_inscription(&d, "kawa1234"),
        Err(ErreurValidation::SiretInvalide)
    );
}

#[test]
fn siret_trop_long_refuse() {
    // 15 caractères : au-dessus de la borne haute.
    let d = demande_professionnelle("123456789012345");
    assert_eq!(
        valider_inscription(&d, "kawa1234"),
        Err(ErreurValidation::SiretInvalide)
    );
}

#[test]
fn siret_aux_bornes_accepte() {
    for siret in ["123456789", "12345678901234"] {
        let d = demande_professionnelle(siret);
        assert_eq!(valider_inscription(&d, "kawa1234"), Ok(()), "SIRET {siret}");
    }
}

#[test]
fn siret_avec_espaces_de_bord_accepte() {
    let d = demande_professionnelle("  123456789  ");
    assert_eq!(valider_inscription(&d, "kawa1234"), Ok(()));
}

#[test]
fn la_validation_precede_le_reseau() {
    // Le contrôle du mot de passe passe avant les règles professionnelles :
    // une demande doublement invalide échoue d'abord sur la confirmation.
    let d = demande_professionnelle("12345678");
    assert_eq!(
        valider_inscription(&d, "autre"),
        Err(ErreurValidation::MotsDePasseDifferents)
    );
}
