//! Service commandes
//!
//! Opérations CRUD, requêtes de domaine et agrégats du tableau de bord.

use serde::Serialize;

use payetonkawa_shared::{
    Commande, NouvelleCommande, ReponseApi, ReponsePaginee, StatsDashboard, StatutCommande,
};

use crate::api::{ApiService, ErreurApi, Methode, Service};

/// `GET /api/commandes`, paginé.
pub async fn lister(
    api: &ApiService,
    page: u32,
    limite: u32,
) -> Result<ReponsePaginee<Commande>, ErreurApi> {
    api.obtenir(
        Service::Commandes,
        "/api/commandes",
        &[("page", page.to_string()), ("limit", limite.to_string())],
    )
    .await
}

/// `GET /api/commandes/:id`.
pub async fn obtenir(api: &ApiService, id: &str) -> Result<ReponseApi<Commande>, ErreurApi> {
    api.obtenir(Service::Commandes, &format!("/api/commandes/{id}"), &[])
        .await
}

/// `POST /api/commandes`.
pub async fn creer(
    api: &ApiService,
    commande: &NouvelleCommande,
) -> Result<ReponseApi<Commande>, ErreurApi> {
    api.envoyer(Service::Commandes, Methode::Post, "/api/commandes", commande)
        .await
}

/// `PUT /api/commandes/:id`.
pub async fn modifier<B: Serialize>(
    api: &ApiService,
    id: &str,
    commande: &B,
) -> Result<ReponseApi<Commande>, ErreurApi> {
    api.envoyer(
        Service::Commandes,
        Methode::Put,
        &format!("/api/commandes/{id}"),
        commande,
    )
    .await
}

/// `DELETE /api/commandes/:id`.
pub async fn supprimer(api: &ApiService, id: &str) -> Result<(), ErreurApi> {
    api.supprimer(Service::Commandes, &format!("/api/commandes/{id}"))
        .await
}

/// Commandes d'un client donné — l'historique du client connecté.
pub async fn par_client(
    api: &ApiService,
    client_id: &str,
) -> Result<ReponsePaginee<Commande>, ErreurApi> {
    api.obtenir(
        Service::Commandes,
        "/api/commandes",
        &[("clientId", client_id.to_string())],
    )
    .await
}

/// Commandes dans un statut donné.
pub async fn par_statut(
    api: &ApiService,
    statut: StatutCommande,
) -> Result<ReponsePaginee<Commande>, ErreurApi> {
    api.obtenir(
        Service::Commandes,
        "/api/commandes",
        &[("statut", statut.code().to_string())],
    )
    .await
}

/// `GET /api/commandes/stats` : agrégats du tableau de bord.
pub async fn stats(api: &ApiService) -> Result<ReponseApi<StatsDashboard>, ErreurApi> {
    api.obtenir(Service::Commandes, "/api/commandes/stats", &[])
        .await
}
