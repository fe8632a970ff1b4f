use super::*;
use chrono::{TimeZone, Utc};

// =========================================================
// Fixtures
// =========================================================

fn produit(id: &str, nom: &str, description: &str, origine: &str) -> Produit {
    Produit {
        id: id.to_string(),
        nom: nom.to_string(),
        description: description.to_string(),
        prix: 19.90,
        stock: 25,
        origine: origine.to_string(),
        intensite: 3,
        image: None,
        actif: true,
        date_creation: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
    }
}

fn catalogue_test() -> Vec<Produit> {
    vec![
        produit("1", "Arabica Éthiopie", "Notes florales et fruitées", "Éthiopie"),
        produit("2", "Robusta Vietnam", "Corsé et puissant", "Vietnam"),
        produit("3", "Colombie Supremo", "Doux, notes de caramel", "Colombie"),
        produit("4", "Moka Sidamo", "Grand cru d'Éthiopie", "Éthiopie"),
    ]
}

// =========================================================
// origines_disponibles
// =========================================================

#[test]
fn origines_commencent_par_la_sentinelle() {
    let origines = origines_disponibles(&catalogue_test());
    assert_eq!(origines[0], ORIGINE_TOUTES);
}

#[test]
fn origines_sont_distinctes_en_ordre_de_premiere_apparition() {
    let origines = origines_disponibles(&catalogue_test());
    assert_eq!(origines, vec!["tous", "Éthiopie", "Vietnam", "Colombie"]);
}

#[test]
fn origines_catalogue_vide() {
    assert_eq!(origines_disponibles(&[]), vec!["tous"]);
}

// =========================================================
// filtrer_produits — recherche et origine
// =========================================================

#[test]
fn recherche_vide_et_sentinelle_rendent_tout() {
    let produits = catalogue_test();
    let resultat = filtrer_produits(&produits, "", ORIGINE_TOUTES, false);
    assert_eq!(resultat.len(), produits.len());
}

#[test]
fn recherche_correspond_au_nom_sans_casse() {
    let produits = catalogue_test();
    let resultat = filtrer_produits(&produits, "ARABICA", ORIGINE_TOUTES, false);
    assert_eq!(resultat.len(), 1);
    assert_eq!(resultat[0].id, "1");
}

#[test]
fn recherche_correspond_aussi_a_la_description() {
    let produits = catalogue_test();
    let resultat = filtrer_produits(&produits, "caramel", ORIGINE_TOUTES, false);
    assert_eq!(resultat.len(), 1);
    assert_eq!(resultat[0].id, "3");
}

#[test]
fn filtre_origine_exact() {
    let produits = catalogue_test();
    let resultat = filtrer_produits(&produits, "", "Éthiopie", false);
    let ids: Vec<&str> = resultat.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
}

#[test]
fn recherche_et_origine_se_combinent() {
    let produits = catalogue_test();
    let resultat = filtrer_produits(&produits, "moka", "Éthiopie", false);
    assert_eq!(resultat.len(), 1);
    assert_eq!(resultat[0].id, "4");

    // Même texte, mauvaise origine : rien.
    assert!(filtrer_produits(&produits, "moka", "Vietnam", false).is_empty());
}

#[test]
fn le_resultat_est_exactement_le_sous_ensemble_attendu() {
    let produits = catalogue_test();
    let resultat = filtrer_produits(&produits, "notes", ORIGINE_TOUTES, false);
    let ids: Vec<&str> = resultat.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

// =========================================================
// filtrer_produits — règle boutique (actif, stock > 0)
// =========================================================

#[test]
fn boutique_exclut_inactifs_et_ruptures() {
    let mut produits = catalogue_test();
    produits[0].actif = false;
    produits[1].stock = 0;

    let boutique = filtrer_produits(&produits, "", ORIGINE_TOUTES, true);
    let ids: Vec<&str> = boutique.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4"]);

    // La vue complète du catalogue, elle, les garde.
    let complet = filtrer_produits(&produits, "", ORIGINE_TOUTES, false);
    assert_eq!(complet.len(), 4);
}

#[test]
fn le_filtrage_ne_modifie_pas_la_source() {
    let produits = catalogue_test();
    let avant = produits.clone();
    let _ = filtrer_produits(&produits, "arabica", "Éthiopie", true);
    assert_eq!(produits, avant);
}
