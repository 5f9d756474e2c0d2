use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};
use multipool::staking::{
    AllUserInfosResponse, ConfigResponse, Cw20HookMsg, ExecuteMsg, InstantiateMsg, MigrateMsg,
    PendingRewardResponse, PoolInfoResponse, PoolsResponse, QueryMsg, RewardMultiplierResponse,
    StakedBalanceResponse, StateResponse, UserInfoResponse, WithdrawQueueResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(Cw20HookMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(StateResponse), &out_dir);
    export_schema(&schema_for!(PoolInfoResponse), &out_dir);
    export_schema(&schema_for!(PoolsResponse), &out_dir);
    export_schema(&schema_for!(UserInfoResponse), &out_dir);
    export_schema(&schema_for!(AllUserInfosResponse), &out_dir);
    export_schema(&schema_for!(PendingRewardResponse), &out_dir);
    export_schema(&schema_for!(StakedBalanceResponse), &out_dir);
    export_schema(&schema_for!(WithdrawQueueResponse), &out_dir);
    export_schema(&schema_for!(RewardMultiplierResponse), &out_dir);
}
