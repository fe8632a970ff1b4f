//! Historique de commandes du client connecté
//!
//! Le contenu n'existe que pour une session authentifiée (contrôle au
//! niveau page, en plus du comportement du routeur). Le total affiché est
//! celui calculé par le backend, jamais redérivé ici.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::{Commande, StatutCommande};

use crate::api::{use_api, GenerationRequetes};
use crate::components::icons::{Calendrier, Lieu, Oeil, Paquet};
use crate::components::statut_badge::BadgeStatut;
use crate::services::commandes;
use crate::session::use_session;

#[component]
pub fn PageMesCommandes() -> impl IntoView {
    let session = use_session();
    let api = StoredValue::new(use_api());

    let (commandes_chargees, fixer_commandes) = signal(Vec::<Commande>::new());
    let (chargement, fixer_chargement) = signal(true);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);
    let generations = GenerationRequetes::new();

    let charger = move |client_id: String| {
        let api = api.get_value();
        let generation = generations.demarrer();
        fixer_chargement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            let resultat = commandes::par_client(&api, &client_id).await;
            if !generations.est_courante(generation) {
                // Réponse dépassée par un chargement plus récent.
                return;
            }
            match resultat {
                Ok(page) => fixer_commandes.set(page.data),
                Err(erreur) => fixer_erreur.set(Some(format!("Erreur : {erreur}"))),
            }
            fixer_chargement.set(false);
        });
    };

    // Relance le chargement quand l'utilisateur connecté change (le memo
    // ignore les autres mouvements de la session, comme la modale) ; une
    // réponse au nom d'un utilisateur précédent est jetée par le compteur
    // de génération.
    let id_utilisateur = Memo::new(move |_| {
        session
            .etat
            .with(|etat| etat.utilisateur.as_ref().map(|utilisateur| utilisateur.id.clone()))
    });
    Effect::new(move |_| {
        if let Some(id) = id_utilisateur.get() {
            charger(id);
        }
    });

    let total = move || commandes_chargees.with(Vec::len);
    let en_cours = move || {
        commandes_chargees
            .with(|liste| liste.iter().filter(|commande| commande.statut.est_en_cours()).count())
    };
    let livrees = move || {
        commandes_chargees.with(|liste| {
            liste
                .iter()
                .filter(|commande| commande.statut == StatutCommande::Livree)
                .count()
        })
    };

    let connecte = move || session.etat.get().utilisateur.is_some();

    view! {
        <Show
            when=connecte
            fallback=|| {
                view! {
                    <div class="text-center py-12">
                        <Paquet attr:class="h-16 w-16 opacity-30 mx-auto mb-4" />
                        <h3 class="text-lg font-medium mb-2">"Connexion requise"</h3>
                        <p class="text-base-content/70">
                            "Vous devez être connecté pour voir vos commandes"
                        </p>
                    </div>
                }
            }
        >
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold">"Mes Commandes"</h1>
                    <p class="text-base-content/70 mt-2">
                        "Suivez l'état de vos commandes et consultez votre historique"
                    </p>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <Paquet attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"Total Commandes"</div>
                        <div class="stat-value text-primary">{total}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"En cours"</div>
                        <div class="stat-value text-warning">{en_cours}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Livrées"</div>
                        <div class="stat-value text-success">{livrees}</div>
                    </div>
                </div>

                <Show when=move || erreur.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || erreur.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show when=move || chargement.get()>
                    <div class="flex justify-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show when=move || !chargement.get() && erreur.get().is_none() && total() == 0>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body text-center py-12">
                            <Paquet attr:class="h-16 w-16 opacity-30 mx-auto mb-4" />
                            <h3 class="text-lg font-medium mb-2">"Aucune commande"</h3>
                            <p class="text-base-content/70">
                                "Vous n'avez pas encore passé de commande. Découvrez nos cafés !"
                            </p>
                        </div>
                    </div>
                </Show>

                <div class="space-y-4">
                    <For
                        each=move || commandes_chargees.get()
                        key=|commande| commande.id.clone()
                        children=move |commande: Commande| {
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <div class="flex items-center justify-between">
                                            <div class="flex items-center gap-4">
                                                <h3 class="text-lg font-semibold">
                                                    {format!("Commande #{}", commande.id)}
                                                </h3>
                                                <BadgeStatut statut=commande.statut />
                                            </div>
                                            <span class="text-2xl font-bold text-primary">
                                                {format!("{:.2} €", commande.total)}
                                            </span>
                                        </div>

                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-2 text-sm text-base-content/70">
                                            <div class="flex items-center gap-2">
                                                <Calendrier attr:class="h-4 w-4" />
                                                {format!(
                                                    "Commandé le {}",
                                                    commande.date_commande.format("%d/%m/%Y"),
                                                )}
                                            </div>
                                            {commande
                                                .date_livraison
                                                .map(|date| {
                                                    view! {
                                                        <div class="flex items-center gap-2">
                                                            <Paquet attr:class="h-4 w-4" />
                                                            {format!("Livré le {}", date.format("%d/%m/%Y"))}
                                                        </div>
                                                    }
                                                })}
                                            <div class="flex items-center gap-2">
                                                <Lieu attr:class="h-4 w-4" />
                                                {commande.adresse_livraison.clone()}
                                            </div>
                                        </div>

                                        <div class="border-t border-base-200 pt-3 mt-2">
                                            <h4 class="font-medium mb-2">"Produits commandés :"</h4>
                                            <div class="space-y-1">
                                                {commande
                                                    .produits
                                                    .iter()
                                                    .map(|ligne| {
                                                        let nom = ligne
                                                            .produit
                                                            .as_ref()
                                                            .map(|produit| produit.nom.clone())
                                                            .unwrap_or_else(|| ligne.produit_id.clone());
                                                        view! {
                                                            <div class="flex justify-between items-center text-sm">
                                                                <span>
                                                                    {format!("{nom} × {}", ligne.quantite)}
                                                                </span>
                                                                <span class="font-medium">
                                                                    {format!(
                                                                        "{:.2} €",
                                                                        ligne.prix_unitaire * f64::from(ligne.quantite),
                                                                    )}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>

                                        <div class="flex justify-end mt-2">
                                            <button class="btn btn-ghost btn-sm gap-2 text-primary">
                                                <Oeil attr:class="h-4 w-4" />
                                                "Voir les détails"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
