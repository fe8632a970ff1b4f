//! Service produits
//!
//! Correspondances directes et typées entre les opérations métier et les
//! appels HTTP du service produits. Aucune logique ici : les paramètres
//! passent tels quels et les erreurs remontent à la page appelante.

use serde::Serialize;

use payetonkawa_shared::{NouveauProduit, Produit, ReponseApi, ReponsePaginee};

use crate::api::{ApiService, ErreurApi, Methode, Service};

/// `GET /api/produits`, paginé.
pub async fn lister(
    api: &ApiService,
    page: u32,
    limite: u32,
) -> Result<ReponsePaginee<Produit>, ErreurApi> {
    api.obtenir(
        Service::Produits,
        "/api/produits",
        &[("page", page.to_string()), ("limit", limite.to_string())],
    )
    .await
}

/// `GET /api/produits/:id`.
pub async fn obtenir(api: &ApiService, id: &str) -> Result<ReponseApi<Produit>, ErreurApi> {
    api.obtenir(Service::Produits, &format!("/api/produits/{id}"), &[])
        .await
}

/// `POST /api/produits`.
pub async fn creer(
    api: &ApiService,
    produit: &NouveauProduit,
) -> Result<ReponseApi<Produit>, ErreurApi> {
    api.envoyer(Service::Produits, Methode::Post, "/api/produits", produit)
        .await
}

/// `PUT /api/produits/:id`. Le corps est une mise à jour partielle ou
/// complète, au choix de l'appelant.
pub async fn modifier<B: Serialize>(
    api: &ApiService,
    id: &str,
    produit: &B,
) -> Result<ReponseApi<Produit>, ErreurApi> {
    api.envoyer(
        Service::Produits,
        Methode::Put,
        &format!("/api/produits/{id}"),
        produit,
    )
    .await
}

/// `DELETE /api/produits/:id`.
pub async fn supprimer(api: &ApiService, id: &str) -> Result<(), ErreurApi> {
    api.supprimer(Service::Produits, &format!("/api/produits/{id}"))
        .await
}

/// Recherche plein texte côté service.
pub async fn rechercher(
    api: &ApiService,
    texte: &str,
) -> Result<ReponsePaginee<Produit>, ErreurApi> {
    api.obtenir(
        Service::Produits,
        "/api/produits",
        &[("search", texte.to_string())],
    )
    .await
}

/// Produits d'une origine donnée.
pub async fn par_origine(
    api: &ApiService,
    origine: &str,
) -> Result<ReponsePaginee<Produit>, ErreurApi> {
    api.obtenir(
        Service::Produits,
        "/api/produits",
        &[("origine", origine.to_string())],
    )
    .await
}
