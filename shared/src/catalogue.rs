//! Filtrage pur du catalogue
//!
//! Fonctions sans état, recalculées à chaque rendu à partir de
//! `{produits, recherche, origine}`. Elles ne modifient jamais la
//! collection source.

use crate::Produit;

#[cfg(test)]
mod tests;

/// Sentinelle « toutes les origines » du filtre.
pub const ORIGINE_TOUTES: &str = "tous";

/// Ensemble des origines présentes dans le catalogue, précédé de la
/// sentinelle [`ORIGINE_TOUTES`]. L'ordre de première apparition est
/// conservé pour un affichage stable du sélecteur.
pub fn origines_disponibles(produits: &[Produit]) -> Vec<String> {
    let mut origines = vec![ORIGINE_TOUTES.to_string()];
    for produit in produits {
        if !origines.iter().any(|o| o == &produit.origine) {
            origines.push(produit.origine.clone());
        }
    }
    origines
}

/// Vue filtrée du catalogue.
///
/// Un produit passe quand son nom ou sa description contient `recherche`
/// (insensible à la casse), que son origine correspond au filtre (ou que le
/// filtre est la sentinelle) et — sur la boutique publique uniquement —
/// qu'il est actif avec du stock.
pub fn filtrer_produits<'a>(
    produits: &'a [Produit],
    recherche: &str,
    origine: &str,
    boutique: bool,
) -> Vec<&'a Produit> {
    let recherche = recherche.to_lowercase();
    produits
        .iter()
        .filter(|produit| {
            let correspond_texte = produit.nom.to_lowercase().contains(&recherche)
                || produit.description.to_lowercase().contains(&recherche);
            let correspond_origine = origine == ORIGINE_TOUTES || produit.origine == origine;
            let en_vente = !boutique || (produit.actif && produit.stock > 0);
            correspond_texte && correspond_origine && en_vente
        })
        .collect()
}
