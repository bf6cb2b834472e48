use crate::cli::{InspectArgs, InspectCommands};
use crate::error::{CliError, Result};
use pharmscreen::core::chem::{descriptors, lipinski::LipinskiRule, smiles};
use pharmscreen::core::seq::properties;

pub fn run(args: InspectArgs) -> Result<()> {
    match args.command {
        InspectCommands::Drug { smiles: input } => {
            let mol = smiles::parse_smiles(&input)
                .map_err(|e| CliError::Argument(format!("invalid SMILES '{}': {}", input, e)))?;
            let d = descriptors::compute(&mol);
            let pass = LipinskiRule::default().evaluate(Some(&d));

            println!("SMILES:        {}", input);
            println!("MolWeight:     {:.3}", d.mol_weight);
            println!("LogP:          {:.3}", d.log_p);
            println!("HBD:           {}", d.h_donors);
            println!("HBA:           {}", d.h_acceptors);
            println!("RotBonds:      {}", d.rotatable_bonds);
            println!("TPSA:          {:.2}", d.tpsa);
            println!("Lipinski:      {}", if pass { "pass" } else { "fail" });
        }
        InspectCommands::Protein { sequence } => {
            let seq = properties::validate(&sequence)
                .map_err(|e| CliError::Argument(format!("invalid sequence: {}", e)))?;
            let d = properties::compute(&seq);

            println!("Length:        {}", seq.len());
            println!("Protein_MW:    {:.2}", d.mol_weight);
            println!("Aromaticity:   {:.4}", d.aromaticity);
            println!("Instability:   {:.2}", d.instability);
            println!("pI:            {:.2}", d.isoelectric_point);
        }
    }
    Ok(())
}
