use triplog_client::commands;
use triplog_client::commands::trip::NewTrip;
use triplog_client::ledger::TripType;
use triplog_client::{ClientError, ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, TripCommand, TripKind};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Trip { command } => match command {
            TripCommand::Add {
                date,
                company,
                vehicle,
                customer,
                mobile,
                location,
                kind,
                amount,
                json: _,
            } => commands::trip::add(NewTrip {
                date: date.clone(),
                company: company.clone(),
                vehicle: vehicle.clone(),
                customer: customer.clone(),
                mobile: mobile.clone(),
                location: location.clone(),
                trip_type: trip_kind_to_type(*kind),
                amount: amount.clone(),
            }),
            TripCommand::List { .. } => commands::trip::list(),
            TripCommand::Clear { yes, .. } => {
                if !yes {
                    return Err(ClientError::confirmation_required());
                }
                commands::trip::clear()
            }
        },
        Commands::Summary { from, to, .. } => {
            let from_value = from.as_ref().map(|value| value.as_str());
            let to_value = to.as_ref().map(|value| value.as_str());
            commands::summary::run(from_value, to_value)
        }
        Commands::Export { out, .. } => commands::export::run(out.as_deref()),
    }
}

fn trip_kind_to_type(kind: TripKind) -> TripType {
    match kind {
        TripKind::Pickup => TripType::Pickup,
        TripKind::Drop => TripType::Drop,
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn clear_without_confirmation_is_refused_before_any_client_call() {
        let parsed = parse_from(["triplog", "trip", "clear"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "confirmation_required");
            }
        }
    }
}
