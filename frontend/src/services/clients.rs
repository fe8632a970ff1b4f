//! Service clients
//!
//! Même discipline que le service produits : une opération, un appel.

use serde::Serialize;

use payetonkawa_shared::{Client, NouveauClient, ReponseApi, ReponsePaginee};

use crate::api::{ApiService, ErreurApi, Methode, Service};

/// `GET /api/clients`, paginé.
pub async fn lister(
    api: &ApiService,
    page: u32,
    limite: u32,
) -> Result<ReponsePaginee<Client>, ErreurApi> {
    api.obtenir(
        Service::Clients,
        "/api/clients",
        &[("page", page.to_string()), ("limit", limite.to_string())],
    )
    .await
}

/// `GET /api/clients/:id`.
pub async fn obtenir(api: &ApiService, id: &str) -> Result<ReponseApi<Client>, ErreurApi> {
    api.obtenir(Service::Clients, &format!("/api/clients/{id}"), &[])
        .await
}

/// `POST /api/clients`.
pub async fn creer(
    api: &ApiService,
    client: &NouveauClient,
) -> Result<ReponseApi<Client>, ErreurApi> {
    api.envoyer(Service::Clients, Methode::Post, "/api/clients", client)
        .await
}

/// `PUT /api/clients/:id`, corps partiel ou complet au choix de l'appelant
/// (la page profil n'envoie que les champs modifiables).
pub async fn modifier<B: Serialize>(
    api: &ApiService,
    id: &str,
    client: &B,
) -> Result<ReponseApi<Client>, ErreurApi> {
    api.envoyer(
        Service::Clients,
        Methode::Put,
        &format!("/api/clients/{id}"),
        client,
    )
    .await
}

/// `DELETE /api/clients/:id`.
pub async fn supprimer(api: &ApiService, id: &str) -> Result<(), ErreurApi> {
    api.supprimer(Service::Clients, &format!("/api/clients/{id}"))
        .await
}

/// Recherche plein texte côté service.
pub async fn rechercher(
    api: &ApiService,
    texte: &str,
) -> Result<ReponsePaginee<Client>, ErreurApi> {
    api.obtenir(
        Service::Clients,
        "/api/clients",
        &[("search", texte.to_string())],
    )
    .await
}
