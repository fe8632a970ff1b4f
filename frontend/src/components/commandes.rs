//! Table d'administration des commandes
//!
//! Liste servie par le service commandes, filtrée côté page par recherche
//! (numéro ou nom de client) et par statut.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::{Commande, StatutCommande};

use crate::api::{use_api, GenerationRequetes};
use crate::components::icons::{Filtre, Oeil, Recherche};
use crate::components::statut_badge::BadgeStatut;
use crate::services::commandes;

const LIMITE_LISTE: u32 = 100;

/// Valeur « tous les statuts » du sélecteur.
const STATUT_TOUS: &str = "tous";

fn filtrer_commandes(liste: &[Commande], recherche: &str, filtre_statut: &str) -> Vec<Commande> {
    let recherche = recherche.to_lowercase();
    liste
        .iter()
        .filter(|commande| {
            let nom_client = commande
                .client
                .as_ref()
                .map(|client| client.nom.to_lowercase())
                .unwrap_or_default();
            let correspond_texte = commande.id.to_lowercase().contains(&recherche)
                || nom_client.contains(&recherche);
            let correspond_statut =
                filtre_statut == STATUT_TOUS || commande.statut.code() == filtre_statut;
            correspond_texte && correspond_statut
        })
        .cloned()
        .collect()
}

#[component]
pub fn PageCommandes() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (commandes_chargees, fixer_commandes) = signal(Vec::<Commande>::new());
    let (chargement, fixer_chargement) = signal(true);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);
    let (recherche, fixer_recherche) = signal(String::new());
    let (filtre_statut, fixer_filtre_statut) = signal(STATUT_TOUS.to_string());
    let generations = GenerationRequetes::new();

    let charger = move || {
        let api = api.get_value();
        let generation = generations.demarrer();
        fixer_chargement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            let resultat = commandes::lister(&api, 1, LIMITE_LISTE).await;
            if !generations.est_courante(generation) {
                return;
            }
            match resultat {
                Ok(page) => fixer_commandes.set(page.data),
                Err(erreur) => fixer_erreur.set(Some(format!("Erreur : {erreur}"))),
            }
            fixer_chargement.set(false);
        });
    };

    Effect::new(move |_| charger());

    let filtres = move || {
        commandes_chargees
            .with(|liste| filtrer_commandes(liste, &recherche.get(), &filtre_statut.get()))
    };

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
    let chiffre_affaires = move || {
        commandes_chargees.with(|liste| {
            format!(
                "{:.2} €",
                liste.iter().map(|commande| commande.total).sum::<f64>()
            )
        })
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Commandes"</h1>
                <p class="text-base-content/70 mt-2">"Suivi des commandes de la boutique"</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Commandes"</div>
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
                <div class="stat">
                    <div class="stat-title">"Chiffre d'affaires"</div>
                    <div class="stat-value text-2xl">{chiffre_affaires}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body flex-col md:flex-row gap-4 py-4">
                    <label class="input input-bordered flex items-center gap-2 flex-1">
                        <Recherche attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Rechercher par numéro ou client..."
                            on:input=move |ev| fixer_recherche.set(event_target_value(&ev))
                            prop:value=recherche
                        />
                    </label>
                    <div class="flex items-center gap-2">
                        <Filtre attr:class="h-4 w-4 opacity-50" />
                        <select
                            class="select select-bordered"
                            on:change=move |ev| fixer_filtre_statut.set(event_target_value(&ev))
                        >
                            <option value=STATUT_TOUS>"Tous les statuts"</option>
                            {StatutCommande::tous()
                                .into_iter()
                                .map(|statut| {
                                    view! {
                                        <option value=statut.code()>{statut.libelle()}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            <Show when=move || erreur.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || erreur.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0 overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Commande"</th>
                                <th>"Client"</th>
                                <th class="hidden md:table-cell">"Articles"</th>
                                <th>"Total"</th>
                                <th>"Statut"</th>
                                <th class="hidden md:table-cell">"Date"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || chargement.get()>
                                <tr>
                                    <td colspan="7" class="text-center py-8">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !chargement.get() && filtres().is_empty()>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "Aucune commande ne correspond aux critères."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=filtres
                                key=|commande| commande.id.clone()
                                children=move |commande: Commande| {
                                    let nom_client = commande
                                        .client
                                        .as_ref()
                                        .map(|client| client.nom.clone())
                                        .unwrap_or_else(|| commande.client_id.clone());
                                    let articles: u32 = commande
                                        .produits
                                        .iter()
                                        .map(|ligne| ligne.quantite)
                                        .sum();
                                    view! {
                                        <tr>
                                            <td class="font-mono text-sm">
                                                {format!("#{}", commande.id)}
                                            </td>
                                            <td>{nom_client}</td>
                                            <td class="hidden md:table-cell">{articles}</td>
                                            <td class="font-mono">
                                                {format!("{:.2} €", commande.total)}
                                            </td>
                                            <td>
                                                <BadgeStatut statut=commande.statut />
                                            </td>
                                            <td class="hidden md:table-cell text-sm">
                                                {commande.date_commande.format("%d/%m/%Y").to_string()}
                                            </td>
                                            <td>
                                                <button class="btn btn-ghost btn-sm btn-square">
                                                    <Oeil attr:class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
