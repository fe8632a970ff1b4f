//! Boutique publique
//!
//! Catalogue en grille avec recherche et filtre d'origine, et panier
//! d'ébauche local à la page. Un visiteur anonyme qui ajoute au panier est
//! invité à se connecter.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::catalogue::{filtrer_produits, origines_disponibles, ORIGINE_TOUTES};
use payetonkawa_shared::Produit;

use crate::api::{use_api, GenerationRequetes};
use crate::components::icons::{Cafe, Etoile, Filtre, Panier, Recherche};
use crate::services::produits;
use crate::session::use_session;

/// Taille de page demandée pour charger le catalogue en une fois.
const LIMITE_CATALOGUE: u32 = 100;

#[component]
pub fn PageBoutique() -> impl IntoView {
    let session = use_session();
    let api = StoredValue::new(use_api());

    let (produits_charges, fixer_produits) = signal(Vec::<Produit>::new());
    let (chargement, fixer_chargement) = signal(true);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);
    let (recherche, fixer_recherche) = signal(String::new());
    let (origine, fixer_origine) = signal(ORIGINE_TOUTES.to_string());
    let (panier, fixer_panier) = signal(HashMap::<String, u32>::new());
    let generations = GenerationRequetes::new();

    let charger = move || {
        let api = api.get_value();
        let generation = generations.demarrer();
        fixer_chargement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            let resultat = produits::lister(&api, 1, LIMITE_CATALOGUE).await;
            if !generations.est_courante(generation) {
                // Un chargement plus récent a pris la main.
                return;
            }
            match resultat {
                Ok(page) => fixer_produits.set(page.data),
                Err(erreur) => fixer_erreur.set(Some(format!("Erreur : {erreur}"))),
            }
            fixer_chargement.set(false);
        });
    };

    Effect::new(move |_| charger());

    // Vues dérivées, pures, recalculées à chaque rendu.
    let origines = move || produits_charges.with(|liste| origines_disponibles(liste));
    let filtres = move || {
        produits_charges.with(|liste| {
            filtrer_produits(liste, &recherche.get(), &origine.get(), true)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let ajouter_au_panier = move |produit_id: String| {
        if session.etat.get_untracked().utilisateur.is_none() {
            session.ouvrir_modale();
            return;
        }
        fixer_panier.update(|panier| *panier.entry(produit_id).or_insert(0) += 1);
    };

    view! {
        <div class="space-y-6">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"Découvrez nos cafés d'exception"</h1>
                <p class="text-xl text-base-content/70 max-w-2xl mx-auto">
                    "Une sélection de cafés premium du monde entier, torréfiés avec passion \
                     pour vous offrir une expérience unique"
                </p>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body flex-col md:flex-row gap-4 py-4">
                    <label class="input input-bordered flex items-center gap-2 flex-1">
                        <Recherche attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Rechercher un café..."
                            on:input=move |ev| fixer_recherche.set(event_target_value(&ev))
                            prop:value=recherche
                        />
                    </label>
                    <div class="flex items-center gap-2">
                        <Filtre attr:class="h-4 w-4 opacity-50" />
                        <select
                            class="select select-bordered"
                            on:change=move |ev| fixer_origine.set(event_target_value(&ev))
                        >
                            <For
                                each=origines
                                key=|origine| origine.clone()
                                children=move |valeur| {
                                    let libelle = if valeur == ORIGINE_TOUTES {
                                        "Toutes les origines".to_string()
                                    } else {
                                        valeur.clone()
                                    };
                                    view! { <option value=valeur.clone()>{libelle}</option> }
                                }
                            />
                        </select>
                    </div>
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

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <For
                    each=filtres
                    key=|produit| produit.id.clone()
                    children=move |produit: Produit| {
                        let id = produit.id.clone();
                        let id_clic = produit.id.clone();
                        let compte = move || panier.get().get(&id).copied().unwrap_or(0);
                        let compte_affiche = compte.clone();
                        view! {
                            <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                                {produit
                                    .image
                                    .clone()
                                    .map(|src| {
                                        view! {
                                            <figure class="relative">
                                                <img
                                                    src=src
                                                    alt=produit.nom.clone()
                                                    class="w-full h-48 object-cover"
                                                />
                                                <span class="badge badge-info absolute top-2 right-2">
                                                    {produit.origine.clone()}
                                                </span>
                                            </figure>
                                        }
                                    })}
                                <div class="card-body p-4">
                                    <h3 class="card-title text-lg">{produit.nom.clone()}</h3>
                                    <p class="text-sm text-base-content/70">
                                        {produit.description.clone()}
                                    </p>
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center gap-1">
                                            {etoiles(produit.intensite)}
                                            <span class="text-sm text-base-content/50 ml-1">
                                                {format!("({}/5)", produit.intensite)}
                                            </span>
                                        </div>
                                        <span class="badge badge-success badge-sm">
                                            {format!("{} en stock", produit.stock)}
                                        </span>
                                    </div>
                                    <div class="flex items-center justify-between mt-2">
                                        <span class="text-2xl font-bold text-primary">
                                            {format!("{:.2} €", produit.prix)}
                                        </span>
                                        <div class="flex items-center gap-2">
                                            <Show when=move || { compte() > 0 }>
                                                <span class="badge badge-primary badge-outline">
                                                    {let compte_affiche = compte_affiche.clone(); move || compte_affiche()}
                                                </span>
                                            </Show>
                                            <button
                                                class="btn btn-primary btn-sm gap-1"
                                                on:click=move |_| ajouter_au_panier(id_clic.clone())
                                            >
                                                <Panier attr:class="h-4 w-4" />
                                                "Ajouter"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !chargement.get() && erreur.get().is_none() && filtres().is_empty()>
                <div class="text-center py-12">
                    <Cafe attr:class="h-16 w-16 opacity-30 mx-auto mb-4" />
                    <h3 class="text-lg font-medium mb-2">"Aucun produit trouvé"</h3>
                    <p class="text-base-content/70">
                        "Essayez de modifier vos critères de recherche ou de filtrage"
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// Rangée d'étoiles d'intensité (sur 5).
fn etoiles(intensite: u8) -> impl IntoView {
    (0..5u8)
        .map(|rang| {
            let classe = if rang < intensite {
                "h-4 w-4 text-warning"
            } else {
                "h-4 w-4 text-base-300"
            };
            view! { <Etoile attr:class=classe /> }
        })
        .collect_view()
}
