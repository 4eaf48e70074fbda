use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use wallettree::resolver::{
    ConfigResponse, ContentHashResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
    ResolverResponse, SecondaryResolverResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(ResolverResponse), &out_dir);
    export_schema(&schema_for!(ContentHashResponse), &out_dir);
    export_schema(&schema_for!(SecondaryResolverResponse), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
}
