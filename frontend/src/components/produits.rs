//! Catalogue complet en vue tableau
//!
//! Même filtrage que la boutique, sans la règle « actif et en stock » : la
//! vue tableau montre tout le catalogue, ruptures et produits désactivés
//! compris. Les actions de ligne sont présentes mais volontairement non
//! câblées.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::catalogue::{filtrer_produits, origines_disponibles, ORIGINE_TOUTES};
use payetonkawa_shared::Produit;

use crate::api::{use_api, GenerationRequetes};
use crate::components::icons::{Corbeille, Crayon, Filtre, Recherche};
use crate::services::produits;

const LIMITE_CATALOGUE: u32 = 100;

#[component]
pub fn PageProduits() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (produits_charges, fixer_produits) = signal(Vec::<Produit>::new());
    let (chargement, fixer_chargement) = signal(true);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);
    let (recherche, fixer_recherche) = signal(String::new());
    let (origine, fixer_origine) = signal(ORIGINE_TOUTES.to_string());
    let generations = GenerationRequetes::new();

    let charger = move || {
        let api = api.get_value();
        let generation = generations.demarrer();
        fixer_chargement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            let resultat = produits::lister(&api, 1, LIMITE_CATALOGUE).await;
            if !generations.est_courante(generation) {
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

    let origines = move || produits_charges.with(|liste| origines_disponibles(liste));
    let filtres = move || {
        produits_charges.with(|liste| {
            filtrer_produits(liste, &recherche.get(), &origine.get(), false)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let total = move || produits_charges.with(Vec::len);
    let actifs = move || {
        produits_charges.with(|liste| liste.iter().filter(|produit| produit.actif).count())
    };
    let ruptures = move || {
        produits_charges.with(|liste| liste.iter().filter(|produit| produit.stock == 0).count())
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Produits"</h1>
                <p class="text-base-content/70 mt-2">"Le catalogue complet de la torréfaction"</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Références"</div>
                    <div class="stat-value text-primary">{total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Actives"</div>
                    <div class="stat-value text-success">{actifs}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"En rupture"</div>
                    <div class="stat-value text-error">{ruptures}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body flex-col md:flex-row gap-4 py-4">
                    <label class="input input-bordered flex items-center gap-2 flex-1">
                        <Recherche attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Rechercher un produit..."
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

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0 overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Produit"</th>
                                <th>"Origine"</th>
                                <th>"Intensité"</th>
                                <th>"Prix"</th>
                                <th>"Stock"</th>
                                <th>"Statut"</th>
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
                                        "Aucun produit ne correspond aux critères."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=filtres
                                key=|produit| produit.id.clone()
                                children=move |produit: Produit| {
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-semibold">{produit.nom.clone()}</div>
                                                <div class="text-sm text-base-content/60">
                                                    {produit.description.clone()}
                                                </div>
                                            </td>
                                            <td>
                                                <span class="badge badge-outline">
                                                    {produit.origine.clone()}
                                                </span>
                                            </td>
                                            <td>{format!("{}/5", produit.intensite)}</td>
                                            <td class="font-mono">
                                                {format!("{:.2} €", produit.prix)}
                                            </td>
                                            <td>
                                                <span class=if produit.stock == 0 {
                                                    "badge badge-error badge-sm"
                                                } else {
                                                    "badge badge-success badge-sm"
                                                }>{produit.stock}</span>
                                            </td>
                                            <td>
                                                <span class=if produit.actif {
                                                    "badge badge-success badge-outline badge-sm"
                                                } else {
                                                    "badge badge-ghost badge-sm"
                                                }>
                                                    {if produit.actif { "Actif" } else { "Inactif" }}
                                                </span>
                                            </td>
                                            <td>
                                                <div class="flex gap-1 justify-end">
                                                    <button class="btn btn-ghost btn-sm btn-square">
                                                        <Crayon attr:class="h-4 w-4" />
                                                    </button>
                                                    <button class="btn btn-ghost btn-sm btn-square text-error">
                                                        <Corbeille attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
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
