//! Tableau de bord d'administration
//!
//! Agrégats servis par `GET /api/commandes/stats`, commandes récentes et
//! rangée d'état des services. Route gardée par le routeur.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::{Commande, StatsDashboard};

use crate::api::{use_api, GenerationRequetes, SanteServices};
use crate::components::icons::Actualiser;
use crate::components::statut_badge::BadgeStatut;
use crate::services::commandes;

#[component]
pub fn PageDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (stats, fixer_stats) = signal(Option::<StatsDashboard>::None);
    let (sante, fixer_sante) = signal(Option::<SanteServices>::None);
    let (chargement, fixer_chargement) = signal(true);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);
    let generations = GenerationRequetes::new();

    let charger = move || {
        let api = api.get_value();
        let generation = generations.demarrer();
        fixer_chargement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            let resultat = commandes::stats(&api).await;
            let etat_services = api.verifier_sante().await;
            if !generations.est_courante(generation) {
                return;
            }
            match resultat {
                Ok(reponse) => fixer_stats.set(Some(reponse.data)),
                Err(erreur) => fixer_erreur.set(Some(format!("Erreur : {erreur}"))),
            }
            fixer_sante.set(Some(etat_services));
            fixer_chargement.set(false);
        });
    };

    Effect::new(move |_| charger());

    let total_clients = move || stats.with(|s| s.as_ref().map(|s| s.total_clients).unwrap_or(0));
    let total_produits = move || stats.with(|s| s.as_ref().map(|s| s.total_produits).unwrap_or(0));
    let total_commandes =
        move || stats.with(|s| s.as_ref().map(|s| s.total_commandes).unwrap_or(0));
    let chiffre_affaires = move || {
        stats.with(|s| {
            format!(
                "{:.2} €",
                s.as_ref().map(|s| s.chiffre_affaires).unwrap_or(0.0)
            )
        })
    };
    let recentes = move || {
        stats.with(|s| {
            s.as_ref()
                .map(|s| s.commandes_recentes.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Tableau de bord"</h1>
                    <p class="text-base-content/70 mt-2">"Vue d'ensemble de l'activité"</p>
                </div>
                <button
                    class="btn btn-ghost btn-circle"
                    disabled=move || chargement.get()
                    on:click=move |_| charger()
                >
                    <Actualiser attr:class=move || {
                        if chargement.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                    } />
                </button>
            </div>

            <Show when=move || erreur.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || erreur.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Clients"</div>
                    <div class="stat-value text-primary">{total_clients}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Produits"</div>
                    <div class="stat-value text-secondary">{total_produits}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Commandes"</div>
                    <div class="stat-value">{total_commandes}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Chiffre d'affaires"</div>
                    <div class="stat-value text-success text-2xl">{chiffre_affaires}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"État des services"</h3>
                    <div class="flex flex-wrap gap-4">
                        {move || {
                            match sante.get() {
                                None => {
                                    view! {
                                        <span class="loading loading-dots loading-sm"></span>
                                    }
                                        .into_any()
                                }
                                Some(etat) => {
                                    etat.entrees()
                                        .into_iter()
                                        .map(|(nom, joignable)| {
                                            view! {
                                                <div class="flex items-center gap-2">
                                                    <span class=if joignable {
                                                        "badge badge-success badge-xs"
                                                    } else {
                                                        "badge badge-error badge-xs"
                                                    }></span>
                                                    <span class="text-sm capitalize">{nom}</span>
                                                    <span class="text-xs text-base-content/50">
                                                        {if joignable { "opérationnel" } else { "injoignable" }}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Commandes récentes"</h3>
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Commande"</th>
                                    <th>"Statut"</th>
                                    <th>"Total"</th>
                                    <th class="hidden md:table-cell">"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || !chargement.get() && recentes().is_empty()>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 text-base-content/50">
                                            "Aucune commande récente."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=recentes
                                    key=|commande| commande.id.clone()
                                    children=move |commande: Commande| {
                                        view! {
                                            <tr>
                                                <td class="font-mono text-sm">
                                                    {format!("#{}", commande.id)}
                                                </td>
                                                <td>
                                                    <BadgeStatut statut=commande.statut />
                                                </td>
                                                <td class="font-mono">
                                                    {format!("{:.2} €", commande.total)}
                                                </td>
                                                <td class="hidden md:table-cell text-sm">
                                                    {commande.date_commande.format("%d/%m/%Y").to_string()}
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
        </div>
    }
}
