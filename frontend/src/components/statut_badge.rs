//! Badge de statut de commande, partagé entre l'historique client et la
//! table d'administration.

use leptos::prelude::*;
use payetonkawa_shared::StatutCommande;

#[component]
pub fn BadgeStatut(statut: StatutCommande) -> impl IntoView {
    let classe = match statut {
        StatutCommande::EnAttente | StatutCommande::EnPreparation => "badge badge-warning",
        StatutCommande::Confirmee | StatutCommande::Expediee => "badge badge-info",
        StatutCommande::Livree => "badge badge-success",
        StatutCommande::Annulee => "badge badge-error",
    };

    view! { <span class=classe>{statut.libelle()}</span> }
}
