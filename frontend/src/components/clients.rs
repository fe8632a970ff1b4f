//! Table d'administration des clients
//!
//! Liste servie par le service clients, filtrée côté page par recherche et
//! type de compte — même discipline pure que le filtrage du catalogue.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::{Client, TypeCompte};

use crate::api::{use_api, GenerationRequetes};
use crate::components::icons::{Corbeille, Crayon, Filtre, Recherche};
use crate::services::clients;

const LIMITE_LISTE: u32 = 100;

/// Valeur « tous les types » du sélecteur.
const TYPE_TOUS: &str = "tous";

fn filtrer_clients(liste: &[Client], recherche: &str, filtre_type: &str) -> Vec<Client> {
    let recherche = recherche.to_lowercase();
    liste
        .iter()
        .filter(|client| {
            let correspond_texte = client.nom.to_lowercase().contains(&recherche)
                || client.email.to_lowercase().contains(&recherche);
            let correspond_type = filtre_type == TYPE_TOUS
                || match client.type_compte {
                    TypeCompte::Particulier => filtre_type == "particulier",
                    TypeCompte::Professionnel => filtre_type == "professionnel",
                };
            correspond_texte && correspond_type
        })
        .cloned()
        .collect()
}

#[component]
pub fn PageClients() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (clients_charges, fixer_clients) = signal(Vec::<Client>::new());
    let (chargement, fixer_chargement) = signal(true);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);
    let (recherche, fixer_recherche) = signal(String::new());
    let (filtre_type, fixer_filtre_type) = signal(TYPE_TOUS.to_string());
    let generations = GenerationRequetes::new();

    let charger = move || {
        let api = api.get_value();
        let generation = generations.demarrer();
        fixer_chargement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            let resultat = clients::lister(&api, 1, LIMITE_LISTE).await;
            if !generations.est_courante(generation) {
                return;
            }
            match resultat {
                Ok(page) => fixer_clients.set(page.data),
                Err(erreur) => fixer_erreur.set(Some(format!("Erreur : {erreur}"))),
            }
            fixer_chargement.set(false);
        });
    };

    Effect::new(move |_| charger());

    let filtres = move || {
        clients_charges
            .with(|liste| filtrer_clients(liste, &recherche.get(), &filtre_type.get()))
    };

    let total = move || clients_charges.with(Vec::len);
    let actifs =
        move || clients_charges.with(|liste| liste.iter().filter(|client| client.actif).count());
    let professionnels = move || {
        clients_charges.with(|liste| {
            liste
                .iter()
                .filter(|client| client.type_compte == TypeCompte::Professionnel)
                .count()
        })
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Clients"</h1>
                <p class="text-base-content/70 mt-2">"Gestion des comptes clients"</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Clients"</div>
                    <div class="stat-value text-primary">{total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Actifs"</div>
                    <div class="stat-value text-success">{actifs}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Professionnels"</div>
                    <div class="stat-value text-info">{professionnels}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body flex-col md:flex-row gap-4 py-4">
                    <label class="input input-bordered flex items-center gap-2 flex-1">
                        <Recherche attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Rechercher par nom ou email..."
                            on:input=move |ev| fixer_recherche.set(event_target_value(&ev))
                            prop:value=recherche
                        />
                    </label>
                    <div class="flex items-center gap-2">
                        <Filtre attr:class="h-4 w-4 opacity-50" />
                        <select
                            class="select select-bordered"
                            on:change=move |ev| fixer_filtre_type.set(event_target_value(&ev))
                        >
                            <option value=TYPE_TOUS>"Tous les types"</option>
                            <option value="particulier">"Particulier"</option>
                            <option value="professionnel">"Professionnel"</option>
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
                                <th>"Client"</th>
                                <th class="hidden md:table-cell">"Téléphone"</th>
                                <th>"Type"</th>
                                <th class="hidden md:table-cell">"Inscrit le"</th>
                                <th>"Statut"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || chargement.get()>
                                <tr>
                                    <td colspan="6" class="text-center py-8">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !chargement.get() && filtres().is_empty()>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        "Aucun client ne correspond aux critères."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=filtres
                                key=|client| client.id.clone()
                                children=move |client: Client| {
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-semibold">{client.nom.clone()}</div>
                                                <div class="text-sm text-base-content/60">
                                                    {client.email.clone()}
                                                </div>
                                            </td>
                                            <td class="hidden md:table-cell">
                                                {client.telephone.clone()}
                                            </td>
                                            <td>
                                                <span class=match client.type_compte {
                                                    TypeCompte::Professionnel => "badge badge-info",
                                                    TypeCompte::Particulier => "badge badge-ghost",
                                                }>{client.type_compte.libelle()}</span>
                                            </td>
                                            <td class="hidden md:table-cell text-sm">
                                                {client.date_creation.format("%d/%m/%Y").to_string()}
                                            </td>
                                            <td>
                                                <span class=if client.actif {
                                                    "badge badge-success badge-outline badge-sm"
                                                } else {
                                                    "badge badge-ghost badge-sm"
                                                }>
                                                    {if client.actif { "Actif" } else { "Inactif" }}
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
